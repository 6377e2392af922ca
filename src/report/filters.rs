//! Custom MiniJinja filters for the text report

use minijinja::Environment;

/// Register all custom filters with the environment
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter("pad", pad);
    env.add_filter("fixed2", fixed2);
}

/// Left-align in a column of `width` characters
fn pad(value: &str, width: usize) -> String {
    format!("{:<width$}", value, width = width)
}

fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}
