//! Mounting helpers for view tests that go through a real `ApiClient`.

use std::time::Duration;

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;

use crate::api::ApiClient;

/// Build `root` with an `ApiClient` for `base_url` in root context and run
/// the first render. Fetches start on the first [`run_for`].
pub fn mount<P: Clone + 'static>(root: fn(P) -> Element, props: P, base_url: &str) -> VirtualDom {
    let mut dom =
        VirtualDom::new_with_props(root, props).with_root_context(ApiClient::new(base_url));
    dom.rebuild_in_place();
    dom
}

/// Drive tasks and re-renders until `duration` has elapsed.
pub async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    while tokio::time::timeout_at(deadline, dom.wait_for_work())
        .await
        .is_ok()
    {
        dom.render_immediate(&mut NoOpMutations);
    }
}

pub fn html(dom: &VirtualDom) -> String {
    dioxus_ssr::render(dom)
}
