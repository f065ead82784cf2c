//! The closed set of admin commands and their argument rules.

use super::{CommandError, CommandInvocation};
use crate::catalog::domain::{CategoryRef, NewProduct, Price, ProductFilter, ProductPatch, Slug};
use crate::orders::domain::{OrderFilter, OrderNumber, OrderStatus};
use std::fmt;

/// Products shown by one `/list`.
pub const PRODUCT_PAGE_SIZE: usize = 20;

/// Orders shown by one `/orders`.
pub const ORDER_PAGE_SIZE: usize = 10;

/// Command names understood by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `/help`
    Help,
    /// `/list`
    List,
    /// `/add`
    Add,
    /// `/update`
    Update,
    /// `/stock`
    Stock,
    /// `/orders`
    Orders,
    /// `/order`
    Order,
}

impl CommandKind {
    /// Every command, in help order.
    pub const ALL: [Self; 7] = [
        Self::Help,
        Self::List,
        Self::Add,
        Self::Update,
        Self::Stock,
        Self::Orders,
        Self::Order,
    ];

    /// Looks up a command by its lower-case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns the command name without the slash.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::List => "list",
            Self::Add => "add",
            Self::Update => "update",
            Self::Stock => "stock",
            Self::Orders => "orders",
            Self::Order => "order",
        }
    }

    /// Returns the usage line shown when arguments are wrong.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Help => "/help",
            Self::List => "/list type=products [filter=active|all]",
            Self::Add => "/add name=<name> price=<price> [desc=<text>] [category=<slug>]",
            Self::Update => "/update <slug> name=<> price=<> desc=<> active=true|false stock=<n>",
            Self::Stock => "/stock <slug> active|inactive",
            Self::Orders => "/orders [status=<status>]",
            Self::Order => "/order <number> [status=<status>]",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.name())
    }
}

/// A validated admin command, ready to run against the stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    /// Show the command summary.
    Help,
    /// List products.
    ListProducts {
        /// Which products to include.
        filter: ProductFilter,
    },
    /// Insert a product.
    AddProduct(NewProduct),
    /// Change fields of a product.
    UpdateProduct {
        /// Product to change.
        slug: Slug,
        /// Fields to change.
        patch: ProductPatch,
    },
    /// Offer or withdraw a product.
    SetAvailability {
        /// Product to change.
        slug: Slug,
        /// New availability.
        active: bool,
    },
    /// List recent orders.
    ListOrders {
        /// Which orders to include.
        filter: OrderFilter,
    },
    /// Show one order with its items.
    ShowOrder {
        /// Order to show.
        number: OrderNumber,
    },
    /// Change the status of one order.
    SetOrderStatus {
        /// Order to change.
        number: OrderNumber,
        /// New status.
        status: OrderStatus,
    },
}

impl AdminCommand {
    /// Returns the command this value was parsed from.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Help => CommandKind::Help,
            Self::ListProducts { .. } => CommandKind::List,
            Self::AddProduct(_) => CommandKind::Add,
            Self::UpdateProduct { .. } => CommandKind::Update,
            Self::SetAvailability { .. } => CommandKind::Stock,
            Self::ListOrders { .. } => CommandKind::Orders,
            Self::ShowOrder { .. } | Self::SetOrderStatus { .. } => CommandKind::Order,
        }
    }
}

impl TryFrom<&CommandInvocation> for AdminCommand {
    type Error = CommandError;

    fn try_from(invocation: &CommandInvocation) -> Result<Self, Self::Error> {
        let name = invocation.name();
        if name.is_empty() {
            return Err(CommandError::EmptyName);
        }
        let kind =
            CommandKind::from_name(name).ok_or_else(|| CommandError::UnknownCommand(name.to_owned()))?;

        match kind {
            CommandKind::Help => Ok(Self::Help),
            CommandKind::List => parse_list(invocation),
            CommandKind::Add => parse_add(invocation),
            CommandKind::Update => parse_update(invocation),
            CommandKind::Stock => parse_stock(invocation),
            CommandKind::Orders => Ok(Self::ListOrders {
                filter: invocation
                    .keyed_arg("status")
                    .map_or_else(OrderFilter::any, OrderFilter::with_status),
            }),
            CommandKind::Order => parse_order(invocation),
        }
    }
}

fn parse_list(invocation: &CommandInvocation) -> Result<AdminCommand, CommandError> {
    let usage = || CommandError::Usage(CommandKind::List);
    let listed = invocation.keyed_arg("type").map(str::to_ascii_lowercase);
    if listed.as_deref() != Some("products") {
        return Err(usage());
    }
    let filter = invocation
        .keyed_arg("filter")
        .map(ProductFilter::try_from)
        .transpose()
        .map_err(|_| usage())?
        .unwrap_or_default();
    Ok(AdminCommand::ListProducts { filter })
}

fn parse_add(invocation: &CommandInvocation) -> Result<AdminCommand, CommandError> {
    let usage = || CommandError::Usage(CommandKind::Add);
    let (Some(name), Some(raw_price)) = (invocation.keyed_arg("name"), invocation.keyed_arg("price"))
    else {
        return Err(usage());
    };
    let price = parse_price(raw_price)?;
    let slug = Slug::from_name(name).map_err(|_| usage())?;

    let mut product = NewProduct::new(name, slug, price).map_err(|_| usage())?;
    if let Some(description) = invocation.keyed_arg("desc") {
        product = product.with_description(description);
    }
    if let Some(category) = invocation.keyed_arg("category") {
        let category_slug = Slug::new(category).map_err(|_| usage())?;
        product = product.with_category(CategoryRef::Slug(category_slug));
    }
    Ok(AdminCommand::AddProduct(product))
}

fn parse_update(invocation: &CommandInvocation) -> Result<AdminCommand, CommandError> {
    let usage = || CommandError::Usage(CommandKind::Update);
    let slug = product_slug(invocation, CommandKind::Update)?;

    let mut patch = ProductPatch::default();
    for (field, value) in invocation.keyed() {
        match field.as_str() {
            "name" => patch.name = Some(value.clone()),
            "price" => patch.price = Some(parse_price(value)?),
            "desc" => patch.description = Some(value.clone()),
            "active" => patch.is_active = Some(parse_flag(field, value)?),
            "stock" => {
                patch.stock_quantity = Some(value.parse().map_err(|_| invalid(field, value))?);
            }
            _ => return Err(usage()),
        }
    }
    if patch.is_empty() {
        return Err(usage());
    }
    Ok(AdminCommand::UpdateProduct { slug, patch })
}

fn parse_stock(invocation: &CommandInvocation) -> Result<AdminCommand, CommandError> {
    let slug = product_slug(invocation, CommandKind::Stock)?;
    let active = match invocation.bare_arg(1).map(str::to_ascii_lowercase).as_deref() {
        Some("active") => true,
        Some("inactive") => false,
        _ => return Err(CommandError::Usage(CommandKind::Stock)),
    };
    Ok(AdminCommand::SetAvailability { slug, active })
}

fn parse_order(invocation: &CommandInvocation) -> Result<AdminCommand, CommandError> {
    let number = invocation
        .bare_arg(0)
        .and_then(|raw| OrderNumber::new(raw).ok())
        .ok_or(CommandError::Usage(CommandKind::Order))?;

    match invocation.keyed_arg("status") {
        None => Ok(AdminCommand::ShowOrder { number }),
        Some(raw) => {
            let status = OrderStatus::try_from(raw)
                .map_err(|_| CommandError::InvalidStatus(raw.to_owned()))?;
            Ok(AdminCommand::SetOrderStatus { number, status })
        }
    }
}

fn product_slug(invocation: &CommandInvocation, kind: CommandKind) -> Result<Slug, CommandError> {
    invocation
        .bare_arg(0)
        .and_then(|raw| Slug::new(raw).ok())
        .ok_or(CommandError::Usage(kind))
}

fn parse_price(raw: &str) -> Result<Price, CommandError> {
    Price::parse(raw).map_err(|_| CommandError::InvalidPrice(raw.to_owned()))
}

fn parse_flag(field: &str, value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(field, value)),
    }
}

fn invalid(field: &str, value: &str) -> CommandError {
    CommandError::InvalidValue {
        field: field.to_owned(),
        value: value.to_owned(),
    }
}
