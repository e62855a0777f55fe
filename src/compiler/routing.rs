use crate::editor::Screen;
use crate::wire::RoutingModel;

/// Builds the document-level navigation map.
///
/// Returns `None` for single-screen (or empty) documents, which carry no routing model.
/// Every screen gets an entry, including screens with no outgoing navigation.
pub fn build_routing_model(screens: &[Screen]) -> Option<RoutingModel> {
    if screens.len() <= 1 {
        return None;
    }

    let model = screens
        .iter()
        .map(|screen| {
            let targets = screen
                .navigation_targets()
                .into_iter()
                .map(str::to_string)
                .collect();
            (screen.id.clone(), targets)
        })
        .collect();
    Some(model)
}
