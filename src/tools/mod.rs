//! Menu capabilities exposed to the reasoning collaborator as callable tools.

use crate::dialogue::prompts::NO_MENU;
use crate::model::money::format_price;
use crate::model::Menu;
use crate::reasoning::{ToolCall, ToolDefinition};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

pub const LOOKUP_ITEM: &str = "lookup_item";
pub const LOOKUP_ITEM_DETAILS: &str = "lookup_item_details";

/// The two read-only questions the assistant may ask about the menu.
pub trait MenuCapabilities: Send + Sync {
    /// Price and allergens of one item, or the condensed menu if the item is unknown.
    fn basic_lookup(&self, item_name: &str) -> String;

    /// Description, price and allergens of one item, or the full menu if the item is unknown.
    fn detailed_lookup(&self, item_name: &str) -> String;
}

/// Answers lookups against one menu snapshot.
#[derive(Debug, Clone)]
pub struct MenuLookup {
    menu: Arc<Menu>,
}

impl MenuLookup {
    pub fn new(menu: Arc<Menu>) -> Self {
        Self { menu }
    }

    pub fn lookup(&self, item_name: &str, detailed: bool) -> String {
        if self.menu.is_empty() {
            return NO_MENU.to_string();
        }
        match (self.menu.find(item_name), detailed) {
            (Some(item), false) => format!(
                "{}: price {}, allergens: {}",
                item.name,
                format_price(item.price),
                item.allergens_display()
            ),
            (Some(item), true) => format!(
                "{}: {} Price {}, allergens: {}",
                item.name,
                item.description,
                format_price(item.price),
                item.allergens_display()
            ),
            (None, false) => self.menu.condensed_table(),
            (None, true) => self.menu.full_table(),
        }
    }
}

impl MenuCapabilities for MenuLookup {
    fn basic_lookup(&self, item_name: &str) -> String {
        self.lookup(item_name, false)
    }

    fn detailed_lookup(&self, item_name: &str) -> String {
        self.lookup(item_name, true)
    }
}

/// JSON-schema function specs for the two lookups.
pub fn menu_tool_definitions() -> Vec<ToolDefinition> {
    let parameters = json!({
        "type": "object",
        "properties": {
            "item_name": {
                "type": "string",
                "description": "Exact menu item name, e.g. \"Latte\""
            }
        },
        "required": ["item_name"]
    });
    vec![
        ToolDefinition {
            name: LOOKUP_ITEM.to_string(),
            description: "Get the price and allergens of a menu item. Returns the whole menu \
                          if the item is not found."
                .to_string(),
            parameters: parameters.clone(),
        },
        ToolDefinition {
            name: LOOKUP_ITEM_DETAILS.to_string(),
            description: "Get the description, price and allergens of a menu item. Only use \
                          when the customer explicitly asks what an item is."
                .to_string(),
            parameters,
        },
    ]
}

#[derive(Deserialize)]
struct LookupArgs {
    #[serde(default)]
    item_name: String,
}

/// Run one tool call and return the text fed back to the model.
///
/// Unparseable arguments are treated as an empty item name, which yields the menu table.
pub fn dispatch(capabilities: &dyn MenuCapabilities, call: &ToolCall) -> String {
    let item_name = match serde_json::from_str::<LookupArgs>(&call.arguments) {
        Ok(args) => args.item_name,
        Err(e) => {
            warn!(tool = %call.name, error = %e, "Bad tool arguments");
            String::new()
        }
    };
    debug!(tool = %call.name, item = %item_name, "Tool call");
    match call.name.as_str() {
        LOOKUP_ITEM => capabilities.basic_lookup(&item_name),
        LOOKUP_ITEM_DETAILS => capabilities.detailed_lookup(&item_name),
        other => format!("Unknown tool: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItem;
    use rust_decimal::Decimal;

    fn lookup() -> MenuLookup {
        MenuLookup::new(Arc::new(Menu::new(vec![
            MenuItem::new("Latte", "Espresso with steamed milk.", Decimal::new(450, 2), "milk"),
            MenuItem::new("Scone", "Buttery and crumbly.", Decimal::new(300, 2), ""),
        ])))
    }

    #[test]
    fn test_basic_lookup_hides_description() {
        let text = lookup().basic_lookup("latte");
        assert_eq!(text, "Latte: price $4.50, allergens: milk");
        assert!(!text.contains("steamed"));
    }

    #[test]
    fn test_basic_lookup_folds_accented_case() {
        let lookup = MenuLookup::new(Arc::new(Menu::new(vec![MenuItem::new(
            "Crème Brûlée Latte",
            "Caramelized sugar and espresso.",
            Decimal::new(550, 2),
            "milk",
        )])));
        assert_eq!(
            lookup.basic_lookup("CRÈME BRÛLÉE LATTE"),
            "Crème Brûlée Latte: price $5.50, allergens: milk"
        );
    }

    #[test]
    fn test_detailed_lookup_includes_description() {
        let text = lookup().detailed_lookup(" LATTE ");
        assert!(text.contains("Espresso with steamed milk."));
        assert!(text.contains("$4.50"));
        assert!(text.contains("milk"));
    }

    #[test]
    fn test_unknown_item_returns_tables() {
        let basic = lookup().basic_lookup("Cortado");
        assert!(basic.contains("Scone | $3.00 | none listed"));
        assert!(!basic.contains("Buttery"));

        let detailed = lookup().detailed_lookup("Cortado");
        assert!(detailed.contains("Buttery and crumbly."));
    }

    #[test]
    fn test_empty_menu_message() {
        let empty = MenuLookup::new(Arc::new(Menu::default()));
        assert_eq!(empty.basic_lookup("Latte"), NO_MENU);
        assert_eq!(empty.detailed_lookup("Latte"), NO_MENU);
    }

    #[test]
    fn test_dispatch_routes_by_name() {
        let capabilities = lookup();
        let call = |name: &str, args: &str| ToolCall {
            id: "c".into(),
            name: name.into(),
            arguments: args.into(),
        };
        assert_eq!(
            dispatch(&capabilities, &call(LOOKUP_ITEM, r#"{"item_name":"Scone"}"#)),
            "Scone: price $3.00, allergens: none listed"
        );
        assert!(dispatch(&capabilities, &call(LOOKUP_ITEM_DETAILS, "not json")).contains("Description"));
        assert_eq!(dispatch(&capabilities, &call("order_pizza", "{}")), "Unknown tool: order_pizza");
    }

    #[test]
    fn test_tool_definitions() {
        let defs = menu_tool_definitions();
        assert_eq!(defs.len(), 2);
        assert_eq!(defs[0].name, LOOKUP_ITEM);
        assert_eq!(defs[1].parameters["required"][0], "item_name");
    }
}
