//! Root construction from a [`Config`].

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;
use std::sync::Arc;

impl Logger {
    /// Builds a root from the default config file (or defaults if there is none).
    ///
    /// # Errors
    /// Config loading errors, plus everything [`Self::from_config_with`] can return.
    pub fn from_config() -> Result<Arc<Self>, crate::Error> {
        let config = Config::load()?;
        Self::from_config_with(&config)
    }

    /// Builds a root from `config`.
    ///
    /// An invalid level name is recovered like [`Self::set_level_name`] does; a log
    /// file that cannot be opened leaves the facility at `None`.
    ///
    /// # Errors
    /// [`crate::Error::InvalidFacility`] for an unknown facility name and
    /// [`crate::Error::UnsupportedFacility`] for `platformlog` without a platform channel.
    pub fn from_config_with(config: &Config) -> Result<Arc<Self>, crate::Error> {
        let facility = config.facility()?;

        let logger = LoggerBuilder::new()
            .process_name(&config.general.process_name)
            .component(&config.general.component)
            .output_to_console(config.output.console)
            .colors(config.output.colors)
            .time_precision(config.precision())
            .contention_timeout(config.contention_timeout())
            .build();

        logger.set_level_name(&config.general.level);

        let path = config.log_path();
        let adopted = logger.set_facility(facility, path.as_deref())?;
        internal::debug(
            "LOGGER",
            &format!(
                "root ready: facility={adopted}, level={}, precision={}",
                logger.level_name(),
                logger.time_precision()
            ),
        );
        Ok(logger)
    }
}
