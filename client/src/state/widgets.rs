//! Widget panels that are closed but still animating out.
//!
//! The engine drops a panel from its state the moment it closes. The view
//! keeps rendering it here, without the visible class, until the fade-out
//! delay passes and [`RetiringPanels::remove`] is called.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use canvas::widget::{OpenWidget, WidgetId};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RetiringPanels {
    panels: Vec<OpenWidget>,
}

impl RetiringPanels {
    pub fn retire(&mut self, widget: OpenWidget) {
        if self.panels.iter().any(|p| p.panel == widget.panel) {
            return;
        }
        self.panels.push(widget);
    }

    /// Drop a panel once its exit delay has elapsed. Returns whether it was
    /// still present.
    pub fn remove(&mut self, panel: WidgetId) -> bool {
        let before = self.panels.len();
        self.panels.retain(|p| p.panel != panel);
        self.panels.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpenWidget> {
        self.panels.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}
