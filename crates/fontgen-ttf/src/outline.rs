//! Glyph outline capture through `ttf_parser::OutlineBuilder`

use fontgen_core::Path;

/// Records outline callbacks as core path commands, in font units
pub struct PathSink<'a> {
    path: &'a mut Path,
}

impl<'a> PathSink<'a> {
    pub fn new(path: &'a mut Path) -> Self {
        Self { path }
    }
}

impl ttf_parser::OutlineBuilder for PathSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to(f64::from(x), f64::from(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to(f64::from(x), f64::from(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path
            .quad_to(f64::from(x1), f64::from(y1), f64::from(x), f64::from(y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.curve_to(
            f64::from(x1),
            f64::from(y1),
            f64::from(x2),
            f64::from(y2),
            f64::from(x),
            f64::from(y),
        );
    }

    fn close(&mut self) {
        self.path.close();
    }
}
