//! Slider configuration and builder.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::SliderResult;
use crate::range::{DEFAULT_STEP, ValueRange};
use crate::selection::Selection;
use crate::slider::{RangeSlider, ValueChanged};
use crate::value_source::{OwnedValues, SharedValues, ValueSource};

/// Plain configuration for a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// Initial low value; defaults to `min`.
    pub low: Option<f32>,
    /// Initial high value; defaults to `max`.
    pub high: Option<f32>,
}

impl SliderConfig {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            step: DEFAULT_STEP,
            low: None,
            high: None,
        }
    }

    /// Validate into a range and an initial selection.
    pub fn resolve(&self) -> SliderResult<(ValueRange, Selection)> {
        let range = ValueRange::new(self.min, self.max, self.step)?;
        let selection = Selection::validated(
            self.low.unwrap_or(range.min()),
            self.high.unwrap_or(range.max()),
            &range,
        )?;
        Ok((range, selection))
    }
}

/// Fluent builder for [`RangeSlider`].
///
/// ```
/// use duoslide_ui::RangeSlider;
///
/// let slider = RangeSlider::builder(0.0, 100.0)
///     .step(5.0)
///     .values(20.0, 80.0)
///     .on_value_changed(|low, high| println!("{low}..{high}"))
///     .build()
///     .unwrap();
/// assert_eq!(slider.selection().low, 20.0);
/// ```
pub struct SliderBuilder<S = ()> {
    config: SliderConfig,
    shared: Option<Rc<RefCell<Selection>>>,
    on_value_changed: Option<ValueChanged>,
    style: S,
}

impl SliderBuilder<()> {
    pub fn new(min: f32, max: f32) -> Self {
        Self::from_config(SliderConfig::new(min, max))
    }

    pub fn from_config(config: SliderConfig) -> Self {
        Self {
            config,
            shared: None,
            on_value_changed: None,
            style: (),
        }
    }
}

impl<S> SliderBuilder<S> {
    pub fn step(mut self, step: f32) -> Self {
        self.config.step = step;
        self
    }

    pub fn low(mut self, low: f32) -> Self {
        self.config.low = Some(low);
        self
    }

    pub fn high(mut self, high: f32) -> Self {
        self.config.high = Some(high);
        self
    }

    pub fn values(self, low: f32, high: f32) -> Self {
        self.low(low).high(high)
    }

    /// Store values in a host-owned cell instead of inside the slider.
    ///
    /// If `low`/`high` were configured they are written into the cell on build; otherwise the
    /// cell's current contents are validated and kept.
    pub fn controlled(mut self, cell: Rc<RefCell<Selection>>) -> Self {
        self.shared = Some(cell);
        self
    }

    pub fn on_value_changed(mut self, callback: impl FnMut(f32, f32) + 'static) -> Self {
        self.on_value_changed = Some(Box::new(callback));
        self
    }

    /// Root style handed through to [`crate::SliderView::root`].
    pub fn style<T>(self, style: T) -> SliderBuilder<T> {
        SliderBuilder {
            config: self.config,
            shared: self.shared,
            on_value_changed: self.on_value_changed,
            style,
        }
    }

    pub fn build(self) -> SliderResult<RangeSlider<S>> {
        let (range, values): (ValueRange, Box<dyn ValueSource>) = match self.shared {
            Some(cell) => {
                let current = *cell.borrow();
                let config = SliderConfig {
                    low: self.config.low.or(Some(current.low)),
                    high: self.config.high.or(Some(current.high)),
                    ..self.config
                };
                let (range, selection) = config.resolve()?;
                *cell.borrow_mut() = selection;
                (range, Box::new(SharedValues::new(cell)))
            }
            None => {
                let (range, selection) = self.config.resolve()?;
                (range, Box::new(OwnedValues::new(selection)))
            }
        };
        Ok(RangeSlider::from_parts(
            range,
            values,
            self.on_value_changed,
            self.style,
        ))
    }
}
