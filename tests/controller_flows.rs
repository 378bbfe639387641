//! Screen flows driven end to end against a mock routes API.

mod common;

use std::time::Duration;

use common::*;
use pretty_assertions::assert_eq;
use rutafy::egui_app::controllers::{
    self, Access, AddEvent, Command, Controllers, Event, Favourites, LoginCommand, LoginEvent,
    LoginPhase, ProfileEvent, SearchEvent, Statistics,
};
use rutafy::egui_app::Screen;
use rutafy::shared::{Credentials, StatEntry};
use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

async fn dispatch(controllers: &mut Controllers, test: &TestApi, event: Event) {
    let commands = controllers.dispatch(event);
    controllers.settle(&test.api, commands).await;
}

async fn mount(controllers: &mut Controllers, test: &TestApi, screen: Screen) {
    let commands = controllers.mount(screen, test.session.snapshot());
    controllers.settle(&test.api, commands).await;
}

async fn fill_login_form(controllers: &mut Controllers, test: &TestApi, password: &str) {
    mount(controllers, test, Screen::Login).await;
    dispatch(controllers, test, Event::Login(LoginEvent::UsernameChanged(EMAIL.to_string()))).await;
    dispatch(controllers, test, Event::Login(LoginEvent::PasswordChanged(password.to_string()))).await;
}

#[tokio::test]
async fn test_login_stores_token_and_fetches_profile_with_bearer() {
    let test = TestApi::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "abc123"})))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": EMAIL, "categories": ["nature"]})))
        .expect(1)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    fill_login_form(&mut controllers, &test, "s3cret").await;
    dispatch(&mut controllers, &test, Event::Login(LoginEvent::LoginRequested)).await;

    assert_eq!(controllers.login.phase, LoginPhase::Authenticated);
    assert_eq!(test.session.get_token(), Some("abc123".to_string()));
    assert_eq!(test.session.get_cached_user(), Some(user(&["nature"])));
    assert_eq!(controllers.login.user, Some(user(&["nature"])));
}

#[tokio::test]
async fn test_rejected_login_sets_error_flag() {
    let test = TestApi::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect username or password"})))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    fill_login_form(&mut controllers, &test, "wrong").await;
    dispatch(&mut controllers, &test, Event::Login(LoginEvent::LoginRequested)).await;

    assert!(controllers.login.invalid_credentials());
    assert!(!controllers.login.is_logged_in());
    assert_eq!(test.session.get_token(), None);
}

#[tokio::test]
async fn test_signup_logs_in_with_same_credentials() {
    let test = TestApi::start().await;
    Mock::given(method("POST"))
        .and(path("/user"))
        .and(body_json(json!({"email": EMAIL, "password": "s3cret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": EMAIL, "categories": []})))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": TOKEN})))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": EMAIL, "categories": []})))
        .expect(1)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    fill_login_form(&mut controllers, &test, "s3cret").await;
    dispatch(&mut controllers, &test, Event::Login(LoginEvent::SignupRequested)).await;

    assert!(controllers.login.is_logged_in());
    assert_eq!(test.session.get_token(), Some(TOKEN.to_string()));
}

#[tokio::test]
async fn test_signup_created_without_body_still_logs_in() {
    let test = TestApi::start().await;
    Mock::given(method("POST"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": TOKEN})))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"email": EMAIL, "categories": []})))
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    fill_login_form(&mut controllers, &test, "s3cret").await;
    dispatch(&mut controllers, &test, Event::Login(LoginEvent::SignupRequested)).await;

    assert_eq!(controllers.login.phase, LoginPhase::Authenticated);
    assert_eq!(test.session.get_token(), Some(TOKEN.to_string()));
}

#[tokio::test]
async fn test_logout_during_login_discards_late_token() {
    let test = TestApi::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": TOKEN}))
                .set_delay(Duration::from_millis(300)),
        )
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.server)
        .await;

    let login = controllers::execute(
        Command::Login(LoginCommand::Authenticate(Credentials::new(EMAIL, "s3cret"))),
        &test.api,
    );
    let logout = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        test.session.clear_session().unwrap();
    };
    let (event, ()) = tokio::join!(login, logout);

    assert_eq!(event, None);
    assert_eq!(test.session.get_token(), None);
}

#[tokio::test]
async fn test_rejected_signup_does_not_try_login() {
    let test = TestApi::start().await;
    Mock::given(method("POST"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Email already registered"))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    fill_login_form(&mut controllers, &test, "s3cret").await;
    dispatch(&mut controllers, &test, Event::Login(LoginEvent::SignupRequested)).await;

    assert!(controllers.login.invalid_credentials());
}

#[tokio::test]
async fn test_logout_clears_session_and_hides_content() {
    let test = TestApi::logged_in_as(TOKEN, &user(&["history"])).await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    mount(&mut controllers, &test, Screen::Favourites).await;
    assert!(controllers.favourites.is_authenticated());

    mount(&mut controllers, &test, Screen::Login).await;
    controllers.login = rutafy::egui_app::controllers::login::logout(
        std::mem::take(&mut controllers.login),
        &test.session,
    )
    .unwrap();

    assert_eq!(test.session.get_token(), None);
    assert_eq!(test.session.get_cached_user(), None);
    assert_eq!(controllers.login.phase, LoginPhase::Anonymous);

    mount(&mut controllers, &test, Screen::Favourites).await;
    assert_eq!(controllers.favourites, Access::Anonymous);
}

#[tokio::test]
async fn test_search_with_no_results() {
    let test = TestApi::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["history", "nature"])))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/places/names"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Jaca"])))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/routes"))
        .and(query_param("minutes", "120"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    mount(&mut controllers, &test, Screen::Search).await;
    assert_eq!(controllers.search.all_categories, vec!["history", "nature"]);
    assert_eq!(controllers.search.all_places, vec!["Jaca"]);

    dispatch(&mut controllers, &test, Event::Search(SearchEvent::SearchRequested)).await;
    assert!(controllers.search.results.is_empty());
    assert!(!controllers.search.searching);
}

#[tokio::test]
async fn test_search_failure_falls_back_to_empty_results() {
    let test = TestApi::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    mount(&mut controllers, &test, Screen::Search).await;
    dispatch(&mut controllers, &test, Event::Search(SearchEvent::SearchRequested)).await;

    assert!(controllers.search.all_categories.is_empty());
    assert!(controllers.search.results.is_empty());
}

#[tokio::test]
async fn test_search_results_and_fire_and_forget_favourite() {
    let test = TestApi::logged_in(TOKEN).await;
    Mock::given(method("GET"))
        .and(path("/routes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([route_json("r1", &["A", "B", "C", "D", "E"])])))
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/routes/r1/fav"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    mount(&mut controllers, &test, Screen::Search).await;
    dispatch(&mut controllers, &test, Event::Search(SearchEvent::SearchRequested)).await;
    assert_eq!(controllers.search.results, vec![route("r1", &["A", "B", "C", "D", "E"])]);

    let before = controllers.search.clone();
    dispatch(
        &mut controllers,
        &test,
        Event::Search(SearchEvent::FavouriteRequested("r1".to_string())),
    )
    .await;
    assert_eq!(controllers.search, before);
}

#[tokio::test]
async fn test_place_favourite_from_search_results() {
    let test = TestApi::logged_in(TOKEN).await;
    Mock::given(method("GET"))
        .and(path("/routes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([route_json("r1", &["Castillo de Loarre", "Jaca"])])))
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/places/Castillo%20de%20Loarre/fav"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    mount(&mut controllers, &test, Screen::Search).await;
    dispatch(&mut controllers, &test, Event::Search(SearchEvent::SearchRequested)).await;

    let before = controllers.search.clone();
    dispatch(
        &mut controllers,
        &test,
        Event::Search(SearchEvent::PlaceFavouriteRequested("Castillo de Loarre".to_string())),
    )
    .await;
    assert_eq!(controllers.search, before);
}

#[tokio::test]
async fn test_anonymous_screens_make_no_authenticated_calls() {
    let test = TestApi::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    for screen in [Screen::Favourites, Screen::Profile, Screen::Statistics] {
        mount(&mut controllers, &test, screen).await;
    }

    assert_eq!(controllers.favourites, Access::Anonymous);
    assert_eq!(controllers.profile, Access::Anonymous);
    assert_eq!(controllers.statistics, Access::Anonymous);
}

#[tokio::test]
async fn test_anonymous_add_sends_nothing() {
    let test = TestApi::start().await;
    Mock::given(method("GET"))
        .and(path("/places/names"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Jaca"])))
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    mount(&mut controllers, &test, Screen::Add).await;
    dispatch(&mut controllers, &test, Event::Add(AddEvent::PlacePicked("Jaca".to_string()))).await;
    dispatch(&mut controllers, &test, Event::Add(AddEvent::AddRequested)).await;

    assert_eq!(controllers.add.last_added, None);
}

#[tokio::test]
async fn test_add_route_shows_returned_route() {
    let test = TestApi::logged_in(TOKEN).await;
    Mock::given(method("GET"))
        .and(path("/places/names"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Jaca", "Ainsa"])))
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/routes"))
        .and(body_json(json!(["Ainsa", "Jaca"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(route_json("new", &["Ainsa", "Jaca"])))
        .expect(1)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    mount(&mut controllers, &test, Screen::Add).await;
    for name in ["Ainsa", "Jaca"] {
        dispatch(&mut controllers, &test, Event::Add(AddEvent::PlacePicked(name.to_string()))).await;
    }
    dispatch(&mut controllers, &test, Event::Add(AddEvent::AddRequested)).await;

    assert_eq!(controllers.add.last_added, Some(route("new", &["Ainsa", "Jaca"])));
    assert!(!controllers.add.submitting);
}

#[tokio::test]
async fn test_favourites_load_routes_and_places() {
    let test = TestApi::logged_in(TOKEN).await;
    Mock::given(method("GET"))
        .and(path("/fav/routes"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([route_json("r1", &["Jaca"])])))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fav/places"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "name": "Jaca",
            "location": {"type": "Point", "coordinates": [42.14, -0.41]},
            "description": "Visit Jaca",
            "municipality": "Huesca",
            "categories": ["history"],
        }])))
        .expect(1)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    mount(&mut controllers, &test, Screen::Favourites).await;

    assert_eq!(
        controllers.favourites,
        Access::Authenticated(Favourites {
            routes: vec![route("r1", &["Jaca"])],
            places: vec![place("Jaca")],
        })
    );
}

#[tokio::test]
async fn test_statistics_fill_both_slots() {
    let test = TestApi::logged_in(TOKEN).await;
    Mock::given(method("GET"))
        .and(path("/stats/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([["history", 2]])))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/municipalities"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    mount(&mut controllers, &test, Screen::Statistics).await;

    assert_eq!(
        controllers.statistics,
        Access::Authenticated(Statistics {
            by_category: vec![StatEntry { name: "history".to_string(), count: 2 }],
            by_municipality: vec![],
        })
    );
}

#[tokio::test]
async fn test_profile_categories_follow_server_answer() {
    let test = TestApi::logged_in_as(TOKEN, &user(&[])).await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["history", "nature", "wine"])))
        .expect(1)
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/user/categories"))
        .and(header("authorization", "Bearer abc123"))
        .and(body_json(json!(["history", "nature"])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"categories": ["history", "nature"]})))
        .expect(1)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    mount(&mut controllers, &test, Screen::Profile).await;
    for category in ["history", "nature"] {
        dispatch(
            &mut controllers,
            &test,
            Event::Profile(ProfileEvent::CategoryPicked(category.to_string())),
        )
        .await;
    }
    dispatch(&mut controllers, &test, Event::Profile(ProfileEvent::SaveRequested)).await;

    let expected = vec!["history".to_string(), "nature".to_string()];
    let profile = controllers.profile.authenticated().expect("profile is authenticated");
    assert_eq!(profile.categories, expected);
    assert_eq!(profile.all_categories.len(), 3);
    assert_eq!(test.session.get_cached_user(), Some(user(&["history", "nature"])));
}

#[tokio::test]
async fn test_profile_save_failure_keeps_cached_user() {
    let test = TestApi::logged_in_as(TOKEN, &user(&["wine"])).await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["history"])))
        .mount(&test.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/user/categories"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&test.server)
        .await;

    let mut controllers = Controllers::default();
    mount(&mut controllers, &test, Screen::Profile).await;
    dispatch(
        &mut controllers,
        &test,
        Event::Profile(ProfileEvent::CategoryPicked("history".to_string())),
    )
    .await;
    dispatch(&mut controllers, &test, Event::Profile(ProfileEvent::SaveRequested)).await;

    let profile = controllers.profile.authenticated().expect("profile is authenticated");
    assert_eq!(profile.categories, vec!["wine".to_string()]);
    assert!(!profile.saving);
    assert_eq!(test.session.get_cached_user(), Some(user(&["wine"])));
}
