//! Event handling across pages, driven by the built-in fixtures.

use storefront_console::app::{handle_event, Action, AppState, Event, Page};
use storefront_console::domain::{SettingField, SettingToggle};
use storefront_console::fixtures::JsonFixtures;
use storefront_console::ui::PageViewModel;
use storefront_console::ui::ListViewModel;

fn state(page: Page) -> AppState {
    AppState::from_store(&JsonFixtures::embedded().unwrap(), page).unwrap()
}

fn list_vm(state: &AppState) -> ListViewModel {
    match state.compute_viewmodel() {
        PageViewModel::List(vm) => vm,
        other => panic!("expected a list page, got {other:?}"),
    }
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn facet(facet: &str, value: &str) -> Event {
    Event::FacetSelected {
        facet: facet.to_string(),
        value: value.to_string(),
    }
}

#[test]
fn pending_tab_narrows_orders() {
    let mut state = state(Page::Orders);
    let (render, actions) = send(&mut state, facet("status", "pending"));
    assert!(render);
    assert!(actions.is_empty());

    let vm = list_vm(&state);
    assert_eq!(vm.heading, "Orders (1)");
    assert_eq!(vm.summary, "Showing 1 of 5 orders");
    assert_eq!(vm.display_items[0].title, "Jane Smith");

    let active = vm.active_tab().unwrap();
    assert_eq!(active.label, "Pending (1)");
    let all = vm.facet_tabs.iter().find(|t| t.value == "all").unwrap();
    assert_eq!(all.label, "All (5)");
}

#[test]
fn query_and_tab_combine() {
    let mut state = state(Page::Users);
    send(&mut state, facet("role", "customer"));
    send(&mut state, Event::QueryChanged("SARAH".to_string()));

    let vm = list_vm(&state);
    assert_eq!(vm.summary, "Showing 1 of 5 users");
    assert_eq!(vm.display_items[0].title, "Sarah Wilson");
    assert_eq!(vm.display_items[0].subtitle, "SW · sarah@example.com");
    assert_eq!(vm.display_items[0].highlight_ranges, vec![(0, 5)]);
}

#[test]
fn initials_are_never_highlighted() {
    let mut state = state(Page::Users);
    send(&mut state, facet("role", "customer"));
    send(&mut state, Event::QueryChanged("w".to_string()));

    let vm = list_vm(&state);
    assert_eq!(vm.summary, "Showing 1 of 5 users");
    assert_eq!(vm.display_items[0].highlight_ranges, vec![(6, 7)]);
}

#[test]
fn unmatched_query_shows_empty_state() {
    let mut state = state(Page::Products);
    send(&mut state, Event::QueryChanged("tablet".to_string()));

    let vm = list_vm(&state);
    assert_eq!(vm.summary, "Showing 0 of 6 products");
    assert!(vm.display_items.is_empty());
    assert_eq!(vm.empty_state.unwrap().message, "No products found");
}

#[test]
fn typing_and_backspace_edit_the_query() {
    let mut state = state(Page::Orders);
    for c in "tom".chars() {
        send(&mut state, Event::Char(c));
    }
    assert_eq!(list_vm(&state).display_items.len(), 1);

    send(&mut state, Event::Backspace);
    assert_eq!(state.orders.filter_state().query(), "to");
}

#[test]
fn navigation_resets_filter_state() {
    let mut state = state(Page::Orders);
    send(&mut state, facet("status", "cancelled"));
    send(&mut state, Event::QueryChanged("sarah".to_string()));

    send(&mut state, Event::Navigate(Page::Products));
    send(&mut state, Event::Navigate(Page::Orders));

    assert!(state.orders.filter_state().is_identity());
    assert_eq!(list_vm(&state).summary, "Showing 5 of 5 orders");
}

#[test]
fn clear_filters_restores_everything() {
    let mut state = state(Page::Products);
    send(&mut state, facet("category", "Electronics"));
    assert_eq!(list_vm(&state).display_items.len(), 3);

    let (render, _) = send(&mut state, Event::ClearFilters);
    assert!(render);
    assert_eq!(list_vm(&state).display_items.len(), 6);

    let (render, _) = send(&mut state, Event::ClearFilters);
    assert!(!render);
}

#[test]
fn stock_facet_uses_derived_levels() {
    let mut state = state(Page::Products);
    send(&mut state, facet("stock", "low_stock"));

    let vm = list_vm(&state);
    assert_eq!(vm.display_items.len(), 1);
    assert_eq!(vm.display_items[0].title, "Blue Light Glasses");
    assert_eq!(vm.display_items[0].badge, "Low Stock");
}

#[test]
fn unknown_facet_leaves_state_untouched() {
    let mut state = state(Page::Orders);
    send(&mut state, Event::QueryChanged("jane".to_string()));

    assert!(handle_event(&mut state, &facet("role", "admin")).is_err());
    assert_eq!(state.orders.filter_state().query(), "jane");
    assert_eq!(list_vm(&state).display_items.len(), 1);
}

#[test]
fn list_events_are_ignored_off_list_pages() {
    for page in [Page::Dashboard, Page::Settings] {
        let mut state = state(page);
        for event in [
            Event::KeyDown,
            Event::Char('a'),
            Event::ClearFilters,
            Event::SelectRecord,
            facet("status", "pending"),
        ] {
            assert_eq!(send(&mut state, event), (false, vec![]));
        }
    }
}

#[test]
fn selection_wraps_and_opens_record() {
    let mut state = state(Page::Orders);

    send(&mut state, Event::KeyUp);
    let (_, actions) = send(&mut state, Event::SelectRecord);
    assert_eq!(
        actions,
        vec![Action::OpenRecord {
            page: Page::Orders,
            id: "#ORD-12349".to_string(),
        }]
    );

    send(&mut state, Event::KeyDown);
    assert_eq!(list_vm(&state).selected_index, Some(0));
}

#[test]
fn select_with_nothing_visible_emits_nothing() {
    let mut state = state(Page::Users);
    send(&mut state, Event::QueryChanged("nobody".to_string()));
    assert_eq!(send(&mut state, Event::SelectRecord), (false, vec![]));
}

#[test]
fn settings_edit_and_save() {
    let mut state = state(Page::Settings);

    send(
        &mut state,
        Event::SettingEdited {
            field: SettingField::StoreName,
            value: "Corner Shop".to_string(),
        },
    );
    send(&mut state, Event::SettingToggled(SettingToggle::TwoFactorAuth));

    let PageViewModel::Settings(vm) = state.compute_viewmodel() else {
        panic!("expected settings page");
    };
    assert!(vm.is_dirty);

    let (render, actions) = send(&mut state, Event::SaveSettings);
    assert!(render);
    let [Action::SaveSettings(saved)] = actions.as_slice() else {
        panic!("expected one save action, got {actions:?}");
    };
    assert_eq!(saved.store_name, "Corner Shop");
    assert!(saved.two_factor_auth);
    assert!(!state.settings.is_dirty());
}

#[test]
fn settings_events_are_ignored_elsewhere() {
    let mut state = state(Page::Orders);
    assert_eq!(send(&mut state, Event::SaveSettings), (false, vec![]));
    assert_eq!(
        send(&mut state, Event::SettingToggled(SettingToggle::PublicStore)),
        (false, vec![])
    );
}
