use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd(config: &Config) -> Result<()> {
    msg_print!(Message::CoursesHeader, true);
    View::courses(&config.categories, &config.default_category, config.priorities());
    Ok(())
}
