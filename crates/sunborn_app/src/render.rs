use std::io::{self, Write};

use sunborn_core::{AppViewModel, CheckStatus};

pub const PROMPT: &str = "Enter wallet address: ";

/// Terminal lines for the current view. Pure, so the copy text is testable.
pub fn render(view: &AppViewModel) -> Vec<String> {
    if view.loading {
        return vec!["Loading whitelist data...".to_string()];
    }

    match view.status {
        CheckStatus::LoadFailed => {
            vec!["Could not load the whitelist data. Please try again later.".to_string()]
        }
        CheckStatus::Idle => vec![format!(
            "Whitelist data loaded ({} + {} addresses). Are you worthy enough, I dare you.",
            view.list_sizes.0, view.list_sizes.1
        )],
        CheckStatus::Checking => vec!["Checking...".to_string()],
        CheckStatus::Whitelisted | CheckStatus::NotWhitelisted => view
            .verdict_message()
            .into_iter()
            .map(ToOwned::to_owned)
            .collect(),
    }
}

pub fn print(view: &AppViewModel) {
    for line in render(view) {
        println!("{line}");
    }
}

pub fn print_prompt() {
    print!("{PROMPT}");
    let _ = io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;
    use sunborn_core::{CheckStatus, WhitelistSource};

    fn view(status: CheckStatus, source: Option<WhitelistSource>) -> AppViewModel {
        AppViewModel {
            loading: false,
            status,
            source,
            can_submit: true,
            list_sizes: (1, 1),
            dirty: false,
        }
    }

    #[test]
    fn loading_line_wins_over_status() {
        let mut v = view(CheckStatus::Idle, None);
        v.loading = true;
        assert_eq!(render(&v), vec!["Loading whitelist data...".to_string()]);
    }

    #[test]
    fn verdict_lines_match_the_contract() {
        assert_eq!(
            render(&view(CheckStatus::Whitelisted, Some(WhitelistSource::A))),
            vec!["Welcome Priest, You're in a High House".to_string()]
        );
        assert_eq!(
            render(&view(CheckStatus::Whitelisted, Some(WhitelistSource::B))),
            vec![
                "Welcome my Disciple. You're worthy enough to rise in the ranks.".to_string()
            ]
        );
        assert_eq!(
            render(&view(CheckStatus::NotWhitelisted, None)),
            vec!["Sorry, you are not worthy yet.".to_string()]
        );
    }

    #[test]
    fn load_failed_renders_a_distinct_error_line() {
        let lines = render(&view(CheckStatus::LoadFailed, None));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Could not load"));
    }
}
