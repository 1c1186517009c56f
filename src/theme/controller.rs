//! ThemeController - single source of truth for the active theme.
//!
//! The controller holds the active `Theme` in a field and projects it onto
//! three injected ports: the display surface (marker classes), the indicator
//! (glyph markup) and the persisted record. It never reads the display
//! surface back; the field is authoritative.
//!
//! Lifecycle:
//! 1. `initialize()` - resolve the stored preference (default dark), apply, render
//! 2. `attach()` - subscribe `toggle()` to the activation source, once
//! 3. `toggle()` - flip, apply, persist, render (per activation)

use std::cell::RefCell;
use std::rc::Rc;

use super::{Glyph, Theme, ThemeError};

/// Root element carrying the mutually-exclusive theme marker
pub trait MarkerSink {
    /// Replace whatever theme marker is present with the marker for `theme`.
    fn apply(&mut self, theme: Theme);
}

/// Replaceable content slot of the indicator element
pub trait IndicatorSink {
    fn show(&mut self, glyph: Glyph);
}

/// Durable key/value record holding the last chosen theme
pub trait PreferencePort {
    /// Raw stored value, `None` when no record exists.
    fn load(&self) -> Result<Option<String>, ThemeError>;
    fn save(&mut self, theme: Theme) -> Result<(), ThemeError>;
}

/// External control whose activation flips the theme
pub trait ActivationSource {
    fn subscribe(&mut self, handler: Box<dyn FnMut()>) -> Result<(), ThemeError>;
}

pub struct ThemeController<M, I, P> {
    theme: Theme,
    surface: M,
    indicator: I,
    store: P,
}

impl<M, I, P> ThemeController<M, I, P>
where
    M: MarkerSink,
    I: IndicatorSink,
    P: PreferencePort,
{
    /// Wire the ports. Nothing is touched until `initialize()`.
    pub fn new(surface: M, indicator: I, store: P) -> Self {
        Self {
            theme: Theme::default(),
            surface,
            indicator,
            store,
        }
    }

    /// Current active theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Resolve the stored preference and project it.
    ///
    /// A missing record, an unreadable store and an unrecognised value all
    /// resolve to the default theme. The resolved default is not written back.
    pub fn initialize(&mut self) -> Theme {
        let resolved = match self.store.load() {
            Ok(Some(value)) => {
                let theme = Theme::parse_or_default(&value);
                if theme.as_str() != value {
                    tracing::warn!("Ignoring stored theme {:?}, using {}", value, theme);
                }
                theme
            }
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        };

        self.theme = resolved;
        self.surface.apply(resolved);
        self.render(resolved);
        tracing::debug!("Theme initialized: {}", resolved);
        resolved
    }

    /// Flip the active theme, then apply, persist and render it.
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.opposite();
        self.theme = next;
        self.surface.apply(next);
        if let Err(e) = self.store.save(next) {
            tracing::warn!("Failed to persist theme {}: {}", next, e);
        }
        self.render(next);
        tracing::debug!("Theme toggled to {}", next);
        next
    }

    /// Write the glyph for `theme` into the indicator.
    pub fn render(&mut self, theme: Theme) {
        self.indicator.show(Glyph::for_theme(theme));
    }

    /// Port accessors (used by tests and hosts that need to inspect state)
    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}

impl<M, I, P> ThemeController<M, I, P>
where
    M: MarkerSink + 'static,
    I: IndicatorSink + 'static,
    P: PreferencePort + 'static,
{
    /// Hand the controller to the activation source; each activation toggles.
    pub fn attach<A: ActivationSource>(
        self,
        source: &mut A,
    ) -> Result<Rc<RefCell<Self>>, ThemeError> {
        let shared = Rc::new(RefCell::new(self));
        let handle = Rc::clone(&shared);
        source.subscribe(Box::new(move || match handle.try_borrow_mut() {
            Ok(mut controller) => {
                controller.toggle();
            }
            Err(_) => tracing::warn!("Theme toggle re-entered, activation dropped"),
        }))?;
        Ok(shared)
    }

    /// Initialize and subscribe in one step (the normal page startup path).
    pub fn start<A: ActivationSource>(
        surface: M,
        indicator: I,
        store: P,
        source: &mut A,
    ) -> Result<Rc<RefCell<Self>>, ThemeError> {
        let mut controller = Self::new(surface, indicator, store);
        controller.initialize();
        controller.attach(source)
    }
}
