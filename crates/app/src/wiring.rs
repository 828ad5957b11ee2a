//! Wiring: connects a [`ThemeToggler`] to a [`UiEventSource`].
//!
//! The toggler is shared between the click and keydown callbacks through
//! `Rc<RefCell<_>>`; delivery is single-threaded so each callback borrows it
//! for the duration of one event.

use std::cell::RefCell;
use std::rc::Rc;

use themeswitch_domain::error::ThemeSwitchError;
use themeswitch_domain::event::UiEvent;

use crate::config::TogglerConfig;
use crate::ports::{ElementLookup, SystemPreference, ThemeAttribute, ToggleControl, UiEventSource};
use crate::toggler::ThemeToggler;

/// Toggler handle shared by the registered callbacks.
pub type SharedToggler<C, A> = Rc<RefCell<ThemeToggler<C, A>>>;

/// Register the click and keydown callbacks for `toggler`.
///
/// # Errors
///
/// Returns [`ThemeSwitchError::ElementNotFound`] if the click target is
/// absent, or a DOM error if the source rejects a registration.
pub fn wire<C, A, S>(
    toggler: &SharedToggler<C, A>,
    source: &S,
    click_target_id: &str,
) -> Result<(), ThemeSwitchError>
where
    C: ToggleControl + 'static,
    A: ThemeAttribute + 'static,
    S: UiEventSource + ?Sized,
{
    let on_click = Rc::clone(toggler);
    source.on_click(
        click_target_id,
        Box::new(move || dispatch(&on_click, &UiEvent::Click)),
    )?;

    let on_key = Rc::clone(toggler);
    source.on_keydown(Box::new(move |press| {
        dispatch(&on_key, &UiEvent::KeyDown(press));
    }))?;

    tracing::debug!(click_target = click_target_id, "theme switch wired");
    Ok(())
}

/// Initialise a toggler from the page and wire it to `source`.
///
/// Nothing is registered if initialisation fails.
///
/// # Errors
///
/// Propagates the errors of [`ThemeToggler::initialize`] and [`wire`].
pub fn install<L, A, P, S>(
    lookup: &L,
    attribute: A,
    preference: &P,
    source: &S,
    config: &TogglerConfig,
) -> Result<SharedToggler<L::Control, A>, ThemeSwitchError>
where
    L: ElementLookup,
    L::Control: 'static,
    A: ThemeAttribute + 'static,
    P: SystemPreference + ?Sized,
    S: UiEventSource + ?Sized,
{
    let toggler = ThemeToggler::initialize(lookup, attribute, preference, config)?;
    let toggler = Rc::new(RefCell::new(toggler));
    wire(&toggler, source, &config.click_target_id)?;
    Ok(toggler)
}

fn dispatch<C: ToggleControl, A: ThemeAttribute>(toggler: &SharedToggler<C, A>, event: &UiEvent) {
    let Ok(mut toggler) = toggler.try_borrow_mut() else {
        tracing::warn!(?event, "theme switch busy, event dropped");
        return;
    };
    if let Err(error) = toggler.handle(event) {
        tracing::warn!(%error, ?event, "theme switch failed to handle event");
    }
}
