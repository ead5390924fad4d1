use codeplan_client::state::route::AppRoute;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn rendered_routes_are_exactly_the_app_routes() {
    let mut rendered: Vec<String> = generate_route_list(App)
        .iter()
        .map(|listing| match listing.path() {
            "" => "/".to_owned(),
            path => path.to_owned(),
        })
        .collect();
    rendered.sort_unstable();
    rendered.dedup();

    let mut expected: Vec<String> = AppRoute::ALL.iter().map(|route| route.path().to_owned()).collect();
    expected.sort_unstable();

    assert_eq!(rendered, expected);
}
