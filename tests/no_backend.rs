use fluentreq::{client::BuildClientError, Client, Error};

#[test]
fn test_client_without_backend_fails_to_build() {
    assert!(matches!(
        Client::new("https://api.test").unwrap_err(),
        BuildClientError::NoBackend
    ));
}

#[test]
fn test_static_dispatch_without_backend() {
    assert!(matches!(
        fluentreq::get("https://api.test", None).unwrap_err(),
        Error::NoBackend
    ));
}
