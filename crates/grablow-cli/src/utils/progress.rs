use grablow::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

const BAR_TEMPLATE: &str = "{prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// One bar over the protein directories of a run.
///
/// The bar message names the protein being processed and each per-protein result is
/// printed as its own line above the bar. The bar is cleared once the run finishes.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: ProgressBar,
}

impl CliProgressHandler {
    /// A handler drawing to stderr, or a hidden one when `visible` is false.
    pub fn new(visible: bool) -> Self {
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        Self::with_draw_target(target)
    }

    fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");
        Self {
            bar: ProgressBar::with_draw_target(Some(0), target).with_style(style),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = self.bar.clone();
        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => bar.set_prefix(name),
            Progress::TaskStart { total_steps } => {
                bar.set_length(total_steps);
                bar.set_position(0);
                bar.reset_eta();
            }
            Progress::ProteinStart { name } => bar.set_message(name),
            Progress::Message(line) => bar.println(line),
            Progress::TaskIncrement => bar.inc(1),
            Progress::TaskFinish | Progress::PhaseFinish => bar.finish_and_clear(),
        })
    }
}
