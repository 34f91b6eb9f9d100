use crate::lookup::PassWindow;

pub fn describe_pass(pass: &PassWindow) -> String {
    let when = match pass.rise_time() {
        Some(rise) => rise.format("%a %b %d %Y %H:%M:%S UTC").to_string(),
        None => format!("epoch {}", pass.risetime),
    };
    format!("Next pass at {} for {} seconds!", when, pass.duration)
}

pub fn render(passes: &[PassWindow]) -> String {
    if passes.is_empty() {
        return "No upcoming passes.".to_string();
    }
    passes
        .iter()
        .map(describe_pass)
        .collect::<Vec<_>>()
        .join("\n")
}
