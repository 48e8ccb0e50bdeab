use crate::error::MainError;
use crate::output::print_value;
use crate::state::AppState;

pub async fn run(state: &AppState) -> Result<(), MainError> {
    let stats = state.store.refresh_dashboard(&state.shutdown).await?;
    print_value(state.format, &stats, |stats| {
        let c = &stats.counts;
        vec![
            ("users", format!("{} ({} active)", c.users, c.active_users)),
            (
                "tools",
                format!(
                    "{} ({} available, {} checked out)",
                    c.tools, c.available_tools, c.checked_out_tools
                ),
            ),
            (
                "chemicals",
                format!(
                    "{} ({} low stock, {} expired)",
                    c.chemicals, c.low_stock_chemicals, c.expired_chemicals
                ),
            ),
            ("kits", c.kits.to_string()),
        ]
    })
}
