//! Grid-Snapping: berechnet grid-ausgerichtete Rechtecke aus Anker und Cursor.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Konfiguration des Platzierungs-Grids.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Pixelgroesse einer Grid-Zelle
    pub cell_size: f32,
    /// Minimale Anzahl Grid-Einheiten pro Achse
    pub min_units: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            min_units: 2,
        }
    }
}

/// Grid-ausgerichtetes Rechteck inklusive Zellenanzahl.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub cols: u32,
    pub rows: u32,
}

impl GridRect {
    /// Linke obere Ecke als Vektor.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Ausdehnung als Vektor.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Berechnet das grid-ausgerichtete Rechteck fuer einen Anker- und einen
/// Cursorpunkt.
///
/// Das Rechteck waechst horizontal in die Richtung, in der der Cursor relativ
/// zum Anker liegt, bleibt aber vertikal immer auf dem Anker zentriert — so
/// liegt die einlaufende Verbindung exakt auf halber Hoehe des neuen Nodes.
/// Die Zeilenanzahl ist dafuer stets gerade. Pure Funktion, deterministisch
/// fuer identische Eingaben.
pub fn compute_grid_rect(anchor: Vec2, cursor: Vec2, cfg: &GridConfig) -> GridRect {
    let dx = cursor.x - anchor.x;
    let dy = cursor.y - anchor.y;

    let cols = ((dx.abs() / cfg.cell_size).round() as u32).max(cfg.min_units);
    let half_rows = ((dy.abs() / cfg.cell_size).round() as u32).max(cfg.min_units);
    let rows = half_rows * 2;

    let width = cols as f32 * cfg.cell_size;
    let height = rows as f32 * cfg.cell_size;

    let x = if dx >= 0.0 { anchor.x } else { anchor.x - width };
    let y = anchor.y - height / 2.0;

    GridRect {
        x,
        y,
        width,
        height,
        cols,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn worked_example_cell20_min2() {
        // Anker (200,0), Cursor (260,40): 3 Spalten, 4 Zeilen → 60×80 px
        let cfg = GridConfig::default();
        let rect = compute_grid_rect(Vec2::new(200.0, 0.0), Vec2::new(260.0, 40.0), &cfg);
        assert_eq!(rect.cols, 3);
        assert_eq!(rect.rows, 4);
        assert_abs_diff_eq!(rect.width, 60.0);
        assert_abs_diff_eq!(rect.height, 80.0);
        assert_abs_diff_eq!(rect.x, 200.0);
        assert_abs_diff_eq!(rect.y, -40.0);
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let cfg = GridConfig::default();
        let a = Vec2::new(13.7, -42.1);
        let m = Vec2::new(-87.3, 15.9);
        assert_eq!(compute_grid_rect(a, m, &cfg), compute_grid_rect(a, m, &cfg));
    }

    #[test]
    fn rows_always_even_and_at_least_twice_min() {
        let cfg = GridConfig::default();
        for (cx, cy) in [(0.0, 0.0), (5.0, 3.0), (-310.0, 47.5), (999.0, -999.0)] {
            let rect = compute_grid_rect(Vec2::ZERO, Vec2::new(cx, cy), &cfg);
            assert_eq!(rect.rows % 2, 0, "Zeilen muessen gerade sein");
            assert!(rect.rows / 2 >= cfg.min_units);
            assert!(rect.cols >= cfg.min_units);
        }
    }

    #[test]
    fn rect_is_vertically_centered_on_anchor() {
        let cfg = GridConfig::default();
        for (ax, ay, cx, cy) in [
            (0.0, 0.0, 100.0, 30.0),
            (50.0, -20.0, -10.0, 85.0),
            (7.5, 3.25, 7.5, 3.25),
        ] {
            let rect = compute_grid_rect(Vec2::new(ax, ay), Vec2::new(cx, cy), &cfg);
            assert_abs_diff_eq!(rect.y + rect.height / 2.0, ay, epsilon = 1e-4);
        }
    }

    #[test]
    fn grows_leftward_when_cursor_left_of_anchor() {
        let cfg = GridConfig::default();
        let anchor = Vec2::new(100.0, 0.0);
        let rect = compute_grid_rect(anchor, Vec2::new(20.0, 0.0), &cfg);
        assert_eq!(rect.cols, 4);
        assert_abs_diff_eq!(rect.x, 100.0 - rect.width);
    }

    #[test]
    fn cursor_on_anchor_yields_minimum_rect() {
        let cfg = GridConfig {
            cell_size: 10.0,
            min_units: 3,
        };
        let rect = compute_grid_rect(Vec2::new(40.0, 40.0), Vec2::new(40.0, 40.0), &cfg);
        assert_eq!(rect.cols, 3);
        assert_eq!(rect.rows, 6);
        assert_abs_diff_eq!(rect.width, 30.0);
        assert_abs_diff_eq!(rect.height, 60.0);
        assert_abs_diff_eq!(rect.x, 40.0);
    }
}
