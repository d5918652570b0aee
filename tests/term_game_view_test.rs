use tui_blockfall::core::{ActivePiece, Frame, Grid, Shape};
use tui_blockfall::term::{FrameBuffer, GameView, Viewport};
use tui_blockfall::types::{Rgb, ShapeKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

fn frame(grid: &Grid, active: Option<&ActivePiece>, score: u32, paused: bool) -> FrameBuffer {
    let frame = Frame {
        grid,
        active,
        score,
        paused,
    };
    GameView::default().render(&frame, Viewport::new(22, 22))
}

#[test]
fn term_view_renders_border_corners() {
    let grid = Grid::new(20, 10);

    // With cell_w=2 and cell_h=1:
    // grid pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = frame(&grid, None, 0, false);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_as_two_chars_wide() {
    let mut grid = Grid::new(20, 10);
    let red = Rgb::new(200, 10, 10);
    grid.set(0, 19, Some(red));

    let fb = frame(&grid, None, 0, false);

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let x0 = 1;
    let y0 = 1 + 19;
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0, y0).unwrap().style.fg, red);
    assert_ne!(fb.get(x0 + 2, y0).unwrap().ch, '█');
}

#[test]
fn term_view_renders_active_piece_in_its_color() {
    let grid = Grid::new(20, 10);
    let blue = Rgb::new(10, 10, 220);
    let piece = ActivePiece::new(Shape::for_kind(ShapeKind::O), blue, 4, 0);

    let fb = frame(&grid, Some(&piece), 0, false);

    for (x, y) in [(4u16, 0u16), (5, 0), (4, 1), (5, 1)] {
        let cell = fb.get(1 + x * 2, 1 + y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, blue);
    }
    assert_ne!(fb.get(1 + 3 * 2, 1).unwrap().ch, '█');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let grid = Grid::new(20, 10);
    let frame = Frame {
        grid: &grid,
        active: None,
        score: 1234,
        paused: false,
    };

    // Wider than the 22x22 grid frame to allow a panel.
    let fb = GameView::default().render(&frame, Viewport::new(60, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("pause"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let grid = Grid::new(20, 10);
    let fb = frame(&grid, None, 77, false);

    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_paused_overlay() {
    let grid = Grid::new(20, 10);

    assert!(!screen_text(&frame(&grid, None, 0, false)).contains("PAUSED"));
    assert!(screen_text(&frame(&grid, None, 0, true)).contains("PAUSED"));
}

#[test]
fn term_view_game_over_banner() {
    let grid = Grid::new(20, 10);
    let view = GameView::default();
    let mut fb = frame(&grid, None, 0, false);

    view.draw_game_over(&mut fb, 300);

    let all = screen_text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("Score: 300"));
}

#[test]
fn term_view_centers_grid_in_large_viewport() {
    let grid = Grid::new(20, 10);
    let frame = Frame {
        grid: &grid,
        active: None,
        score: 0,
        paused: false,
    };

    let fb = GameView::default().render(&frame, Viewport::new(42, 30));

    // (42 - 22) / 2 = 10, (30 - 22) / 2 = 4
    assert_eq!(fb.get(10, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(31, 25).unwrap().ch, '┘');
}
