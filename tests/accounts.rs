use axum::http::{header, StatusCode};

mod common;

#[tokio::test]
async fn account_lifecycle() -> Result<(), Box<dyn std::error::Error>>
{
	let app = common::init_app().await?;

	// the literal login route must not be swallowed by the profile capture route
	let response = common::get(&app,"/accounts/login/").await;
	assert_eq!(response.status(),StatusCode::OK);
	assert!(common::body_string(response).await.contains("/accounts/auth/"));

	let response = common::post_form(&app,"/accounts/register/","username=jane&display_name=Jane+Doe&password=hunter242",None).await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);
	assert_eq!(response.headers()[header::LOCATION],"/accounts/register_success/");
	let response = common::get(&app,"/accounts/register_success/").await;
	assert_eq!(response.status(),StatusCode::OK);

	// a taken username re-renders the form
	let response = common::post_form(&app,"/accounts/register/","username=jane&display_name=Jane&password=hunter242",None).await;
	assert_eq!(response.status(),StatusCode::CONFLICT);
	assert!(common::body_string(response).await.contains("already taken"));

	// and so does an invalid one
	let response = common::post_form(&app,"/accounts/register/","username=a&password=hunter242",None).await;
	assert_eq!(response.status(),StatusCode::BAD_REQUEST);

	let response = common::post_form(&app,"/accounts/auth/","username=jane&password=wrong",None).await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);
	assert_eq!(response.headers()[header::LOCATION],"/accounts/invalid/");
	let response = common::get(&app,"/accounts/invalid/").await;
	assert_eq!(response.status(),StatusCode::OK);

	let response = common::post_form(&app,"/accounts/auth/","username=jane&password=hunter242",None).await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);
	assert_eq!(response.headers()[header::LOCATION],"/accounts/loggedin/");
	let cookie = common::session_cookie(&response);

	let response = common::get_authed(&app,"/accounts/loggedin/",&cookie).await;
	assert_eq!(response.status(),StatusCode::OK);
	assert!(common::body_string(response).await.contains("Jane Doe"));

	// without a session the landing page sends you to the form
	let response = common::get(&app,"/accounts/loggedin/").await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);
	assert_eq!(response.headers()[header::LOCATION],"/accounts/login/");

	// profile pages live beside the literal routes
	let response = common::get(&app,"/accounts/jane/").await;
	assert_eq!(response.status(),StatusCode::OK);
	assert!(common::body_string(response).await.contains("Jane Doe"));
	let response = common::get(&app,"/accounts/nosuchuser/").await;
	assert_eq!(response.status(),StatusCode::NOT_FOUND);

	// logout drops the session for good
	let response = common::get_authed(&app,"/accounts/logout/",&cookie).await;
	assert_eq!(response.status(),StatusCode::OK);
	let response = common::get_authed(&app,"/accounts/loggedin/",&cookie).await;
	assert_eq!(response.status(),StatusCode::SEE_OTHER);

	Ok(())
}
