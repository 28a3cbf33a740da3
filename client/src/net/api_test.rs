use super::*;

#[test]
fn endpoint_same_origin() {
    assert_eq!(endpoint("", "/move"), "/move");
}

#[test]
fn endpoint_trims_trailing_slash() {
    assert_eq!(endpoint("http://localhost:3000/", "/reset"), "http://localhost:3000/reset");
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status(502).to_string(), "server returned 502");
    assert_eq!(ApiError::Network("offline".into()).to_string(), "network error: offline");
    assert_eq!(ApiError::Decode("eof".into()).to_string(), "invalid response: eof");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_natively() {
    let api = HttpApi::default();
    assert_eq!(futures::executor::block_on(api.submit_move(0)), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(api.reset()), Err(ApiError::Unavailable));
}

#[test]
fn only_2xx_counts_as_success() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(304));
    assert!(!is_success(502));
}
