//! Steam store HTTP mock endpoint creation utilities.
//!
//! Mock endpoints simulate the storefront `appdetails` contract: a JSON
//! object keyed by app id string with a `success` flag and optional `data`.

use mockito::{Matcher, Mock};
use serde_json::json;
use steam::model::AppDetails;

use crate::fixtures::game::GameFixtures;

impl<'a> GameFixtures<'a> {
    /// Create a mock `appdetails` endpoint returning a successful envelope.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn create_app_details_endpoint(
        &mut self,
        app_id: i64,
        details: AppDetails,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            app_id.to_string(): {
                "success": true,
                "data": details,
            }
        });

        self.setup
            .server
            .mock("GET", "/appdetails")
            .match_query(Matcher::UrlEncoded("appids".into(), app_id.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `appdetails` endpoint reporting the app id as
    /// unsuccessful.
    pub fn create_app_details_not_found(
        &mut self,
        app_id: i64,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({ app_id.to_string(): { "success": false } });

        self.setup
            .server
            .mock("GET", "/appdetails")
            .match_query(Matcher::UrlEncoded("appids".into(), app_id.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `appdetails` endpoint returning an HTTP error status.
    pub fn create_app_details_error(
        &mut self,
        app_id: i64,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/appdetails")
            .match_query(Matcher::UrlEncoded("appids".into(), app_id.to_string()))
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }
}
