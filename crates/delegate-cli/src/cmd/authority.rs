use crate::output::print_json;
use delegate_core::authority::authority_flags;

pub fn run(title: &str, description: &str, json: bool) -> anyhow::Result<()> {
    let flags = authority_flags(title, description);

    if json {
        print_json(&serde_json::json!({
            "flagged": !flags.is_empty(),
            "phrases": flags,
        }))?;
    } else if flags.is_empty() {
        println!("No authority flags.");
    } else {
        println!("Needs your authority: {}", flags.join(", "));
    }
    Ok(())
}
