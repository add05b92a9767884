use ggez::graphics::{Canvas, DrawMode, DrawParam, Mesh, MeshBuilder, PxScale, Rect, Text, TextLayout};
use ggez::Context;

use crate::app::game::Game;
use crate::app::geometry::{Button, Geometry};
use crate::app::palette::Palette;
use crate::basic::{GridDim, Point};
use crate::error::{Error, ErrorConversion, Result};

/// Board background and, optionally, the lines between cells,
/// relative to the board's top-left corner
pub fn board_mesh(
    board_dim: GridDim,
    geometry: &Geometry,
    palette: &Palette,
    draw_grid: bool,
    ctx: &Context,
) -> Result<Mesh> {
    let GridDim { row: rows, col: cols } = board_dim;
    let mut builder = MeshBuilder::new();

    let res = (|| -> Result {
        builder.rectangle(
            DrawMode::fill(),
            Point::zero().rect(geometry.board_size),
            palette.board_color,
        )?;

        if draw_grid {
            let Point { x: width, y: height } = geometry.board_size;
            for col in 1..cols {
                let x = col as f32 * geometry.cell_side;
                builder.line(&[Point { x, y: 0. }, Point { x, y: height }], palette.grid_thickness, palette.grid_color)?;
            }
            for row in 1..rows {
                let y = row as f32 * geometry.cell_side;
                builder.line(&[Point { x: 0., y }, Point { x: width, y }], palette.grid_thickness, palette.grid_color)?;
            }
        }
        Ok(())
    })();

    res.map(|()| Mesh::from_data(ctx, builder.build()))
        .with_trace_step("board_mesh")
}

/// Snake and food, relative to the board's top-left corner
pub fn game_mesh(game: &Game, geometry: &Geometry, palette: &Palette, crashed: bool, ctx: &Context) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();
    let snake = game.snake();
    let len = snake.len();

    let res = (|| -> Result {
        if let Some(food) = game.food() {
            // slightly smaller than a cell
            let inset = geometry.cell_side * 0.15;
            let mut rect = geometry.cell_rect(food);
            rect.translate([inset, inset]);
            rect.w -= 2. * inset;
            rect.h -= 2. * inset;
            builder.rectangle(DrawMode::fill(), rect, palette.food_color)?;
        }

        // tail first so the head is drawn on top
        for (seg, pos) in snake.body.iter().enumerate().rev() {
            let color = if crashed && seg == 0 {
                palette.crashed_color
            } else {
                palette.segment_color(seg, len)
            };
            builder.rectangle(DrawMode::fill(), geometry.cell_rect(pos), color)?;
        }
        Ok(())
    })();

    res.map(|()| Mesh::from_data(ctx, builder.build()))
        .with_trace_step("game_mesh")
}

/// Darken the board behind the game over message
pub fn overlay_mesh(geometry: &Geometry, palette: &Palette, ctx: &Context) -> Result<Mesh> {
    let rect: Rect = geometry.board_offset.rect(geometry.board_size);
    Mesh::new_rectangle(ctx, DrawMode::fill(), rect, palette.overlay_color)
        .map_err(Error::from)
        .with_trace_step("overlay_mesh")
}

pub fn draw_buttons(
    buttons: &[Button],
    enabled: impl Fn(&Button) -> bool,
    palette: &Palette,
    canvas: &mut Canvas,
    ctx: &Context,
) -> Result {
    let res = (|| -> Result {
        let mut builder = MeshBuilder::new();
        let mut labels = vec![];
        for button in buttons {
            let color = if enabled(button) {
                palette.button_color
            } else {
                palette.button_disabled_color
            };
            builder.rectangle(DrawMode::stroke(2.), button.rect, color)?;

            let mut text = Text::new(button.label);
            text.set_scale(PxScale::from(20.)).set_layout(TextLayout::center());
            let center = Point {
                x: button.rect.x + button.rect.w / 2.,
                y: button.rect.y + button.rect.h / 2.,
            };
            labels.push((text, center, color));
        }

        canvas.draw(&Mesh::from_data(ctx, builder.build()), DrawParam::default());
        for (text, center, color) in labels {
            canvas.draw(&text, DrawParam::default().dest(center).color(color));
        }
        Ok(())
    })();

    res.with_trace_step("draw_buttons")
}
