//! Paint tool interface and the built-in tools.
//!
//! A tool is driven through one stroke at a time: `start` on press, `apply`
//! for every drag position and `stop` on release. Tools declare their
//! adjustable settings as a schema; the canvas keeps the values.

use easel_core::{Color, Point, Size};

/// Packed pixel surface tools draw into. Writes outside the buffer are
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: Size,
    data: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(size: Size, fill: Color) -> Self {
        Self {
            size,
            data: vec![fill.to_pixel(); size.area()],
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn data(&self) -> &[u32] {
        &self.data
    }

    fn index(&self, p: Point) -> Option<usize> {
        let (x, y) = (usize::try_from(p.x).ok()?, usize::try_from(p.y).ok()?);
        let (w, h) = (self.size.width as usize, self.size.height as usize);
        (x < w && y < h).then_some(y * w + x)
    }

    pub fn get(&self, p: Point) -> Option<Color> {
        self.index(p).map(|i| Color::from_pixel(self.data[i]))
    }

    pub fn set(&mut self, p: Point, color: Color) {
        if let Some(i) = self.index(p) {
            self.data[i] = color.to_pixel();
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.data.fill(color.to_pixel());
    }

    /// Paint a filled disc; radius 0 is a single pixel.
    pub fn stamp(&mut self, center: Point, radius: u32, color: Color) {
        let r = radius as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set(center.offset(Point::new(dx, dy)), color);
                }
            }
        }
    }

    /// Stamp every point on the segment from `from` to `to`, both included.
    pub fn line(&mut self, from: Point, to: Point, radius: u32, color: Color) {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            self.stamp(from, radius, color);
            return;
        }
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = Point::new(
                from.x + (dx as f32 * t).round() as i32,
                from.y + (dy as f32 * t).round() as i32,
            );
            self.stamp(p, radius, color);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolColors {
    pub foreground: Color,
    pub background: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingKind {
    Range { min: f32, max: f32 },
    Toggle,
}

/// One adjustable value a tool exposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingSpec {
    pub name: &'static str,
    pub kind: SettingKind,
    pub default: f32,
}

/// Current values for a tool's schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolSettings {
    values: Vec<(SettingSpec, f32)>,
}

impl ToolSettings {
    pub fn from_schema(schema: &[SettingSpec]) -> Self {
        Self {
            values: schema.iter().map(|spec| (*spec, spec.default)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<f32> {
        self.values
            .iter()
            .find(|(spec, _)| spec.name == name)
            .map(|(_, v)| *v)
    }

    /// Store `value` for `name`, clamped to the declared range. Returns
    /// false when the schema has no such setting.
    pub fn set(&mut self, name: &str, value: f32) -> bool {
        let Some((spec, slot)) = self.values.iter_mut().find(|(spec, _)| spec.name == name) else {
            return false;
        };
        *slot = match spec.kind {
            SettingKind::Range { min, max } => value.clamp(min, max),
            SettingKind::Toggle => {
                if value != 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        };
        true
    }
}

pub trait Tool {
    fn name(&self) -> &str;

    fn schema(&self) -> &[SettingSpec] {
        &[]
    }

    fn start(&mut self, canvas: &mut PixelBuffer, pos: Point, colors: ToolColors, settings: &ToolSettings);

    fn apply(&mut self, canvas: &mut PixelBuffer, pos: Point);

    fn stop(&mut self, canvas: &mut PixelBuffer, pos: Point);
}

const BRUSH_SCHEMA: &[SettingSpec] = &[SettingSpec {
    name: "radius",
    kind: SettingKind::Range { min: 0.0, max: 64.0 },
    default: 0.0,
}];

/// Freehand stroke in the foreground color, joined between samples so fast
/// drags leave no gaps.
#[derive(Debug, Clone, Default)]
pub struct BrushTool {
    color: Color,
    radius: u32,
    last: Option<Point>,
}

impl BrushTool {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&mut self, canvas: &mut PixelBuffer, pos: Point, color: Color, settings: &ToolSettings) {
        self.color = color;
        self.radius = settings.get("radius").unwrap_or(0.0).max(0.0) as u32;
        canvas.stamp(pos, self.radius, self.color);
        self.last = Some(pos);
    }
}

impl Tool for BrushTool {
    fn name(&self) -> &str {
        "brush"
    }

    fn schema(&self) -> &[SettingSpec] {
        BRUSH_SCHEMA
    }

    fn start(&mut self, canvas: &mut PixelBuffer, pos: Point, colors: ToolColors, settings: &ToolSettings) {
        self.begin(canvas, pos, colors.foreground, settings);
    }

    fn apply(&mut self, canvas: &mut PixelBuffer, pos: Point) {
        let Some(last) = self.last else {
            return;
        };
        canvas.line(last, pos, self.radius, self.color);
        self.last = Some(pos);
    }

    fn stop(&mut self, canvas: &mut PixelBuffer, pos: Point) {
        self.apply(canvas, pos);
        self.last = None;
    }
}

/// Brush that paints the background color.
#[derive(Debug, Clone, Default)]
pub struct EraserTool {
    stroke: BrushTool,
}

impl EraserTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for EraserTool {
    fn name(&self) -> &str {
        "eraser"
    }

    fn schema(&self) -> &[SettingSpec] {
        BRUSH_SCHEMA
    }

    fn start(&mut self, canvas: &mut PixelBuffer, pos: Point, colors: ToolColors, settings: &ToolSettings) {
        self.stroke.begin(canvas, pos, colors.background, settings);
    }

    fn apply(&mut self, canvas: &mut PixelBuffer, pos: Point) {
        self.stroke.apply(canvas, pos);
    }

    fn stop(&mut self, canvas: &mut PixelBuffer, pos: Point) {
        self.stroke.stop(canvas, pos);
    }
}

type ToolFactory = Box<dyn Fn() -> Box<dyn Tool>>;

/// Named tool factories, in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    factories: Vec<(String, ToolFactory)>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the brush and the eraser.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("brush", || Box::new(BrushTool::new()));
        registry.register("eraser", || Box::new(EraserTool::new()));
        registry
    }

    /// Add a factory. A later registration under the same name replaces the
    /// earlier one.
    pub fn register(&mut self, name: impl Into<String>, factory: impl Fn() -> Box<dyn Tool> + 'static) {
        let name = name.into();
        self.factories.retain(|(n, _)| *n != name);
        self.factories.push((name, Box::new(factory)));
    }

    pub fn create(&self, name: &str) -> Option<Box<dyn Tool>> {
        self.factories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, factory)| factory())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.factories.iter().map(|(n, _)| n.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> ToolColors {
        ToolColors {
            foreground: Color::BLACK,
            background: Color::WHITE,
        }
    }

    #[test]
    fn test_brush_stroke_has_no_gaps() {
        let mut canvas = PixelBuffer::new(Size::new(20, 20), Color::WHITE);
        let mut brush = BrushTool::new();
        let settings = ToolSettings::from_schema(brush.schema());
        brush.start(&mut canvas, Point::new(0, 0), colors(), &settings);
        brush.apply(&mut canvas, Point::new(10, 5));
        brush.stop(&mut canvas, Point::new(10, 5));

        for x in 0..=10 {
            let painted = (0..20).any(|y| canvas.get(Point::new(x, y)) == Some(Color::BLACK));
            assert!(painted, "column {x} left blank");
        }
        assert_eq!(canvas.get(Point::new(15, 15)), Some(Color::WHITE));
    }

    #[test]
    fn test_eraser_uses_background_and_radius() {
        let mut canvas = PixelBuffer::new(Size::new(9, 9), Color::BLACK);
        let mut eraser = EraserTool::new();
        let mut settings = ToolSettings::from_schema(eraser.schema());
        assert!(settings.set("radius", 1.0));
        eraser.start(&mut canvas, Point::new(4, 4), colors(), &settings);
        eraser.stop(&mut canvas, Point::new(4, 4));

        assert_eq!(canvas.get(Point::new(4, 3)), Some(Color::WHITE));
        assert_eq!(canvas.get(Point::new(3, 3)), Some(Color::BLACK));
    }

    #[test]
    fn test_writes_outside_are_dropped() {
        let mut canvas = PixelBuffer::new(Size::new(4, 4), Color::WHITE);
        canvas.stamp(Point::new(-1, 2), 1, Color::BLACK);
        assert_eq!(canvas.get(Point::new(0, 2)), Some(Color::BLACK));
        assert_eq!(canvas.get(Point::new(-1, 2)), None);
    }

    #[test]
    fn test_settings_clamp_to_schema() {
        let mut settings = ToolSettings::from_schema(BRUSH_SCHEMA);
        assert!(settings.set("radius", 500.0));
        assert_eq!(settings.get("radius"), Some(64.0));
        assert!(!settings.set("opacity", 0.5));
    }

    #[test]
    fn test_registry_creates_by_name() {
        let registry = ToolRegistry::with_defaults();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["brush", "eraser"]);
        assert_eq!(registry.create("eraser").map(|t| t.name().to_string()), Some("eraser".into()));
        assert!(registry.create("lasso").is_none());
    }
}
