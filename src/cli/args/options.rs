use clap::ValueEnum;
use yatra::Tab;

/// Tabs accepted by `--start-tab`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TabArg {
	Home,
	Places,
	Food,
	Transport,
	Guides,
}

impl TabArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		Tab::from(self).as_str()
	}
}

impl From<TabArg> for Tab {
	fn from(value: TabArg) -> Self {
		match value {
			TabArg::Home => Tab::Home,
			TabArg::Places => Tab::Places,
			TabArg::Food => Tab::Food,
			TabArg::Transport => Tab::Transport,
			TabArg::Guides => Tab::Guides,
		}
	}
}

/// Output formats for the session summary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
