//! Rendering of settled cells, ghost and active piece through GameView

use blockfall::core::{Board, GameState, Piece};
use blockfall::term::{encode_diff_into, encode_full_into, AnchorY, GameView, Rgb, Viewport};
use blockfall::types::{BoardSize, Command, Direction, PieceKind};

const VIEWPORT: Viewport = Viewport {
    width: 60,
    height: 30,
};

/// Terminal position of board cell (x, y) for a 12-wide board in VIEWPORT,
/// anchored at the top: frame starts at column (60 - 42) / 2 = 9.
fn screen_pos(x: i8, y: i8) -> (u16, u16) {
    (10 + 2 * x as u16, 1 + y as u16)
}

fn view() -> GameView {
    GameView::default().with_anchor_y(AnchorY::Top)
}

fn state_with_settled_cells() -> GameState {
    let board = Board::new(BoardSize::new(12, 24))
        .commit(&Piece::from_kind(PieceKind::O, (6, 23)))
        .commit(&Piece::from_kind(PieceKind::T, (2, 21)));
    GameState::start(BoardSize::new(12, 24), 12345)
        .with_board(board)
        .with_active_piece(Piece::from_kind(PieceKind::I, (9, 2)))
}

#[test]
fn settled_cells_are_drawn_in_piece_color() {
    let state = state_with_settled_cells();
    let fb = view().render(&state.snapshot(), VIEWPORT);

    for (kind, origin) in [(PieceKind::O, (6, 23)), (PieceKind::T, (2, 21))] {
        for (x, y) in Piece::from_kind(kind, origin).coordinates() {
            let (sx, sy) = screen_pos(x, y);
            for dx in 0..2 {
                let glyph = fb.get(sx + dx, sy).unwrap();
                assert_eq!(glyph.ch, '█', "{:?} cell ({}, {})", kind, x, y);
                assert_eq!(glyph.style.fg, Rgb::from(kind.color()));
            }
        }
    }

    // An empty cell shows the grid dot
    let (sx, sy) = screen_pos(0, 0);
    assert_eq!(fb.get(sx, sy).unwrap().ch, '·');
}

#[test]
fn ghost_and_active_piece_are_drawn() {
    let state = state_with_settled_cells();
    let fb = view().render(&state.snapshot(), VIEWPORT);

    for (x, y) in state.active().coordinates() {
        let (sx, sy) = screen_pos(x, y);
        assert_eq!(fb.get(sx, sy).unwrap().ch, '█');
    }
    for (x, y) in state.projection().coordinates() {
        let (sx, sy) = screen_pos(x, y);
        assert_eq!(fb.get(sx, sy).unwrap().ch, '░');
    }
}

#[test]
fn ghost_can_be_hidden() {
    let state = state_with_settled_cells();
    let fb = view().with_ghost(false).render(&state.snapshot(), VIEWPORT);
    assert!(!fb.contains_text("░"));
}

#[test]
fn side_panel_shows_score_and_speed() {
    let mut snap = state_with_settled_cells().snapshot();
    snap.score = 1500;
    snap.velocity = 7;
    let fb = view().render(&snap, VIEWPORT);
    assert!(fb.contains_text("1500"));
    assert!(fb.contains_text("SPEED"));
    assert!(fb.contains_text("7"));
}

#[test]
fn moving_a_piece_produces_a_small_diff() {
    let state = state_with_settled_cells();
    let before = view().render(&state.snapshot(), VIEWPORT);
    let after = view().render(
        &state.reduce(Command::step(Direction::Left)).snapshot(),
        VIEWPORT,
    );
    assert_ne!(before, after);

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len() / 4);
}

#[test]
fn custom_board_size_renders() {
    let state = GameState::start(BoardSize::new(6, 10), 1);
    let fb = view().render(&state.snapshot(), Viewport::new(40, 14));
    assert!(fb.contains_text("NEXT"));
    assert!(!fb.contains_text("too small"));
}
