use crate::utils::dedup_chain;
use eyre::EyreHandler;
use itertools::Itertools;
use std::{error::Error, fmt};

/// The environment variable that switches to the `color-eyre` report with backtraces.
pub const DEBUG_ENV: &str = "LOGTOPIC_DEBUG";

const PANIC_SECTION: &str = "This is a bug. Consider reporting it to the logtopic maintainers.";

/// Reports errors as their deduplicated cause chain, outermost first.
#[derive(Clone, Copy, Debug, Default)]
pub struct Handler;

impl EyreHandler for Handler {
    fn display(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&dedup_chain(error).iter().format("; "), f)
    }

    fn debug(&self, error: &(dyn Error + 'static), f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return fmt::Debug::fmt(error, f);
        }
        let causes = dedup_chain(error);
        let Some((error, sources)) = causes.split_first() else { return Ok(()) };
        f.write_str(error)?;
        for source in sources {
            write!(f, "\n  caused by: {source}")?;
        }
        Ok(())
    }
}

/// Installs the global [`eyre`] and [`panic`](mod@std::panic) hooks.
///
/// Errors go through [`Handler`] unless `LOGTOPIC_DEBUG` is set, in which case the full
/// `color-eyre` report is used. Panics always get the `color-eyre` report.
pub fn install() {
    let (panic_hook, eyre_hook) =
        color_eyre::config::HookBuilder::default().panic_section(PANIC_SECTION).into_hooks();
    panic_hook.install();

    if std::env::var_os(DEBUG_ENV).is_some() {
        if let Err(e) = eyre_hook.install() {
            debug!("failed to install color-eyre hook: {e}");
        }
    } else if let Err(e) = eyre::set_hook(Box::new(|_| Box::new(Handler))) {
        debug!("failed to install eyre hook: {e}");
    }
}
