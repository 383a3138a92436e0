//! Container seam between the column and its hosting surface.
//!
//! The hosting framework hands each column a surface it may position, tag
//! with classes, and fill with markup. Height flows the other way: the column
//! measures the surface to learn how many pixels its hour window occupies.

/// Handle to the surface a time column renders into.
pub trait Container {
    /// Position the container within the grid: left offset and width, both
    /// as percentages of the full grid width.
    fn set_placement(&mut self, left_percent: f64, width_percent: f64);

    /// Tag the container with a style class.
    fn add_class(&mut self, class: &str);

    /// Current pixel height of the container, measured externally.
    fn height(&self) -> f64;

    /// Replace the container's markup wholesale.
    fn set_markup(&mut self, markup: String);
}

/// In-memory container with a fixed height.
///
/// Used by tests and the demo binary; a real host would adapt its own
/// document node behind the same trait.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedPanel {
    height: f64,
    pub left_percent: f64,
    pub width_percent: f64,
    pub classes: Vec<String>,
    pub markup: String,
}

impl FixedPanel {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// Simulate an external resize.
    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl Container for FixedPanel {
    fn set_placement(&mut self, left_percent: f64, width_percent: f64) {
        self.left_percent = left_percent;
        self.width_percent = width_percent;
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_markup(&mut self, markup: String) {
        self.markup = markup;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_panel_placement() {
        let mut panel = FixedPanel::new(1200.0);
        panel.set_placement(28.57, 14.285);
        assert_eq!(panel.left_percent, 28.57);
        assert_eq!(panel.width_percent, 14.285);
        assert_eq!(panel.height(), 1200.0);
    }

    #[test]
    fn test_add_class_deduplicates() {
        let mut panel = FixedPanel::new(100.0);
        panel.add_class("timegrid-today");
        panel.add_class("timegrid-today");
        assert_eq!(panel.classes.len(), 1);
    }
}
