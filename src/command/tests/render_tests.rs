//! Tests for reply rendering after a committed write.

use crate::command::domain::CommandKind;
use crate::command::services::render_committed;
use minijinja::context;
use rstest::rstest;

#[rstest]
fn committed_write_renders_its_template() {
    let reply = render_committed(
        CommandKind::Add,
        "✅ Product {{ slug }} added\n",
        context! { slug => "pie" },
        || "fallback".to_owned(),
    );

    assert_eq!(reply, "✅ Product pie added");
}

#[rstest]
#[case("✅ Product {{ slug added")]
#[case("{% if slug %}unterminated")]
#[case("{{ slug | no_such_filter }}")]
fn broken_template_after_write_still_reports_success(#[case] template: &str) {
    let reply = render_committed(
        CommandKind::Add,
        template,
        context! { slug => "pie" },
        || "✅ Product pie added".to_owned(),
    );

    assert_eq!(reply, "✅ Product pie added");
}
