//! Reply templates.
//!
//! Replies are plain WhatsApp text. Each template is rendered on its own
//! with a fresh [`Environment`], so nothing is cached between commands.

use minijinja::{Environment, context};
use serde::Serialize;
use tracing::warn;

use crate::command::domain::{CommandError, CommandKind};

const HELP: &str = "\
🛠️ Admin commands
{% for usage in commands %}{{ usage }}
{% endfor %}
Values cannot contain spaces.";

pub(super) const PRODUCT_LIST: &str = "\
{% if products %}📦 Products ({{ filter }}): {{ products | length }}
{% for product in products %}• {{ product.name }} ({{ product.slug }}) - {{ product.price }}\
{% if not product.is_active %} [inactive]{% endif %} stock {{ product.stock_quantity }}
{% endfor %}{% else %}📦 No {{ filter }} products.{% endif %}";

pub(super) const PRODUCT_ADDED: &str = "\
✅ Product added
Name: {{ product.name }}
Slug: {{ product.slug }}
Price: {{ product.price }}
{% if product.description %}Description: {{ product.description }}
{% endif %}Active: {{ 'yes' if product.is_active else 'no' }}";

pub(super) const PRODUCT_UPDATED: &str = "\
✅ Product {{ product.slug }} updated
Name: {{ product.name }}
Price: {{ product.price }}
Stock: {{ product.stock_quantity }}
Active: {{ 'yes' if product.is_active else 'no' }}";

pub(super) const AVAILABILITY: &str = "\
✅ {{ product.name }} ({{ product.slug }}) is now {{ 'active' if product.is_active else 'inactive' }}";

pub(super) const ORDER_LIST: &str = "\
{% if orders %}🧾 Orders{% if status %} ({{ status }}){% endif %}: {{ orders | length }}
{% for order in orders %}• {{ order.order_number }} - {{ order.customer.name }} - {{ order.total_amount }} [{{ order.status }}]
{% endfor %}{% else %}🧾 No orders{% if status %} with status {{ status }}{% endif %}.{% endif %}";

pub(super) const ORDER_DETAIL: &str = "\
🧾 Order {{ order.order_number }}
Status: {{ order.status }}
Customer: {{ order.customer.name }} ({{ order.customer.phone }})
Address: {{ order.customer.delivery_address }}
{% if order.customer.special_instructions %}Notes: {{ order.customer.special_instructions }}
{% endif %}Items:
{% for item in items %}• {{ item.quantity }} x {{ item.product_name }} @ {{ item.product_price }} = {{ item.total_price }}
{% endfor %}Total: {{ order.total_amount }}";

pub(super) const ORDER_STATUS: &str = "\
✅ Order {{ order.order_number }} is now {{ order.status }}";

/// Returns the `/help` reply listing every command's usage.
///
/// # Errors
///
/// Returns [`CommandError::Fault`] when the template fails to render.
pub fn help_text() -> Result<String, CommandError> {
    let commands: Vec<&str> = CommandKind::ALL.into_iter().map(CommandKind::usage).collect();
    render(CommandKind::Help, HELP, context! { commands })
}

pub(super) fn render<S: Serialize>(
    kind: CommandKind,
    template: &str,
    context: S,
) -> Result<String, CommandError> {
    let environment = Environment::new();
    environment
        .render_str(template, context)
        .map(|text| text.trim_end().to_owned())
        .map_err(|err| CommandError::fault(kind, err))
}

/// Renders the reply to a command whose store write has already committed.
///
/// The write is not undone when the template fails, so the failure is
/// logged and `fallback` is returned as the success reply instead.
pub(crate) fn render_committed<S: Serialize>(
    kind: CommandKind,
    template: &str,
    context: S,
    fallback: impl FnOnce() -> String,
) -> String {
    render(kind, template, context).unwrap_or_else(|err| {
        warn!(command = kind.name(), error = %err, "reply template failed after write");
        fallback()
    })
}
