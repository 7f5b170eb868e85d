use grid_arcade::core::{GridGame, GridSnapshot, MazeGame, SnakeGame, TicTacToe};
use grid_arcade::term::{GridView, Viewport};
use grid_arcade::types::{CellState, Coord, GameKind, GameStatus, PlayerId};

#[test]
fn term_view_renders_border_corners() {
    let snap = SnakeGame::new(10, 8, 1).snapshot();
    let view = GridView::default().with_hints(false);

    // 10 cells * 2 columns + border = 22 wide, 8 rows + border = 10 tall.
    let fb = view.render(&snap, Viewport::new(22, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
    assert_eq!(fb.get(21, 9).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_walls_two_chars_wide() {
    let snap = MazeGame::new(6, 6, 4).snapshot();
    let fb = GridView::default().render(&snap, Viewport::new(14, 8));

    // Inside the border the top-left maze cell is always wall.
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
    assert_eq!(fb.get(2, 1).unwrap().ch, '█');
    assert_eq!(fb.get(3, 2).unwrap().ch, 'P');
}

#[test]
fn term_view_marks_use_three_columns() {
    let mut snap: GridSnapshot = TicTacToe::new().snapshot();
    snap.cells[4] = CellState::Occupied(PlayerId::Two);
    snap.cursor = Some(Coord::new(2, 2));

    let view = GridView::for_kind(GameKind::TicTacToe).with_hints(false);
    assert_eq!(view.cell_width(), 3);
    let fb = view.render(&snap, Viewport::new(11, 5));

    assert_eq!(fb.row_text(2), "│ ·  O  · │");
    assert_eq!(fb.row_text(3), "│ ·  · [·]│");
}

#[test]
fn term_view_overlay_names_the_winner() {
    let mut snap = TicTacToe::new().snapshot();
    snap.status = GameStatus::Won(PlayerId::Two);
    let fb = GridView::for_kind(GameKind::TicTacToe).render(&snap, Viewport::new(40, 10));
    let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.contains("O WINS"));
}

#[test]
fn term_view_maze_escape_overlay() {
    let mut snap = MazeGame::new(10, 10, 1).snapshot();
    snap.status = GameStatus::Won(PlayerId::One);
    let fb = GridView::default().render(&snap, Viewport::new(50, 14));
    let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.contains("ESCAPED"));
}
