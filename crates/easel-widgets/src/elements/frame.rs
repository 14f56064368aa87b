use easel_config::ThemeConfig;
use easel_core::{Color, DrawCtx, Point, Rect};

/// Colors and outline shared by interactive controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlStyle {
    pub background: Color,
    pub hover: Color,
    pub press: Color,
    pub outline: Color,
    pub text: Color,
    pub outline_thickness: f32,
}

impl ControlStyle {
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        Self {
            background: Color::from_array(theme.background),
            hover: Color::from_array(theme.hover),
            press: Color::from_array(theme.press),
            outline: Color::from_array(theme.outline),
            text: Color::from_array(theme.text),
            outline_thickness: theme.outline_thickness,
        }
    }
}

impl Default for ControlStyle {
    fn default() -> Self {
        Self::from_theme(&ThemeConfig::default())
    }
}

/// Rectangle state carried by every widget that occupies an area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub rect: Rect,
    pub background: Color,
    pub outline: Color,
    /// Negative values draw inward and widen the hit region by the same
    /// amount.
    pub outline_thickness: f32,
}

impl Frame {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            background: Color::TRANSPARENT,
            outline: Color::TRANSPARENT,
            outline_thickness: 0.0,
        }
    }

    pub fn styled(rect: Rect, style: &ControlStyle) -> Self {
        Self {
            rect,
            background: style.background,
            outline: style.outline,
            outline_thickness: style.outline_thickness,
        }
    }

    pub fn position(&self) -> Point {
        self.rect.origin
    }

    pub fn hit_test(&self, p: Point) -> bool {
        self.rect.hit_test(p, self.outline_thickness)
    }

    pub fn paint(&self, cx: &mut DrawCtx<'_>) {
        cx.rect(self.rect, self.background, self.outline, self.outline_thickness);
    }
}
