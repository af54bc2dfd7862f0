use crate::{CoreError, MenuEntry, MenuLayout, WindowCatalog, present_window};

use super::support::{CountingWindowFactory, MAIN_TOML, MENU_TOML};

/// WHAT: Menu layout parses all entry kinds in order
/// WHY: The binary builds the native menu from this list
#[test]
#[allow(clippy::unwrap_used)]
fn given_menu_toml_when_parsing_then_entries_in_order() {
    // Given/When: The standard menu
    let layout = MenuLayout::from_toml("menu", MENU_TOML).unwrap();

    // Then: Four entries, first hosts the clock
    assert_eq!(layout.entries().len(), 4);
    assert_eq!(
        layout.first_item(),
        Some(&MenuEntry::Item {
            title: "Date & Time".to_string()
        })
    );
    assert_eq!(layout.entries()[1], MenuEntry::Separator);
    assert_eq!(
        layout.entries()[2],
        MenuEntry::ShowWindow {
            title: "Preferences...".to_string(),
            window: "preferencesID".to_string(),
            accelerator: Some("CmdOrCtrl+Comma".to_string()),
        }
    );
    assert!(matches!(layout.entries()[3], MenuEntry::Quit { .. }));
}

/// WHAT: Empty source gives an empty layout
/// WHY: An empty menu means "no menu", not an error
#[test]
#[allow(clippy::unwrap_used)]
fn given_empty_toml_when_parsing_then_empty_layout() {
    // Given/When: Empty source
    let layout = MenuLayout::from_toml("menu", "").unwrap();

    // Then: No first item
    assert!(layout.is_empty());
    assert!(layout.first_item().is_none());
}

/// WHAT: Unknown entry kinds are rejected
/// WHY: A typo in the layout should fail loudly at build time
#[test]
fn given_unknown_kind_when_parsing_then_layout_parse_error() {
    // Given: An entry with an unknown kind
    let source = "[[items]]\nkind = \"submenu\"\ntitle = \"More\"\n";

    // When: Parsing
    let result = MenuLayout::from_toml("menu", source);

    // Then: LayoutParse naming the layout
    assert!(matches!(
        result,
        Err(CoreError::LayoutParse { ref name, .. }) if name == "menu"
    ));
}

/// WHAT: Catalog finds windows by identifier
/// WHY: Preferences are instantiated by a fixed id
#[test]
#[allow(clippy::unwrap_used)]
fn given_catalog_when_instantiating_then_known_ids_resolve() {
    // Given: The Main catalog
    let catalog = WindowCatalog::from_toml("Main", MAIN_TOML).unwrap();

    // When/Then: Known id resolves, unknown does not
    let def = catalog.instantiate("preferencesID").unwrap();
    assert_eq!(def.title, "Preferences");
    assert_eq!((def.width, def.height), (480.0, 270.0));
    assert!(!def.resizable);
    assert!(catalog.instantiate("aboutID").is_none());
    assert_eq!(catalog.name(), "Main");
}

/// WHAT: Presenting a valid id opens exactly one window
/// WHY: Each preferences action opens one new window
#[test]
#[allow(clippy::unwrap_used)]
fn given_valid_id_when_presenting_then_one_window_opened() {
    // Given: Catalog and counting factory
    let catalog = WindowCatalog::from_toml("Main", MAIN_TOML).unwrap();
    let mut factory = CountingWindowFactory::default();

    // When: Presenting preferences
    let window = present_window(&catalog, &mut factory, "preferencesID");

    // Then: One window with the catalog title
    assert_eq!(window.as_deref(), Some("Preferences"));
    assert_eq!(factory.opened, vec!["preferencesID".to_string()]);
}

/// WHAT: Presenting an unknown id opens nothing
/// WHY: A bad identifier is a silent no-op, never a crash
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_id_when_presenting_then_no_window_opened() {
    // Given: Catalog and counting factory
    let catalog = WindowCatalog::from_toml("Main", MAIN_TOML).unwrap();
    let mut factory = CountingWindowFactory::default();

    // When: Presenting an id that is not registered
    let window = present_window(&catalog, &mut factory, "missingID");

    // Then: Nothing opened
    assert!(window.is_none());
    assert!(factory.opened.is_empty());
}

/// WHAT: Factory failure yields no window
/// WHY: Window-system errors must not propagate to the menu action
#[test]
#[allow(clippy::unwrap_used)]
fn given_failing_factory_when_presenting_then_none() {
    // Given: Factory that cannot open windows
    let catalog = WindowCatalog::from_toml("Main", MAIN_TOML).unwrap();
    let mut factory = CountingWindowFactory {
        fail: true,
        ..CountingWindowFactory::default()
    };

    // When/Then: Presenting returns None
    assert!(present_window(&catalog, &mut factory, "preferencesID").is_none());
}
