use std::sync::{Mutex, Once};

use fluentreq::{
    backend_fn, register_backend, Client, Error, Method, RawResponse, Request, RequestOptions,
    Value,
};

static SEEN: Mutex<Vec<Request>> = Mutex::new(Vec::new());
static REGISTER: Once = Once::new();

fn init() {
    REGISTER.call_once(|| {
        register_backend(backend_fn(|req: Request| {
            let res = RawResponse {
                status: 200,
                message: "OK".into(),
                headers: vec![("X-Echo-Method".into(), req.method.to_string())],
                body: req.url.clone(),
            };
            SEEN.lock().unwrap().push(req);
            Ok(res)
        }));
    });
}

fn take_request(url: &str) -> Request {
    let seen = SEEN.lock().unwrap();
    seen.iter()
        .find(|req| req.url == url)
        .cloned()
        .expect("request not recorded")
}

#[test]
fn test_static_get_forwards_url_verbatim() {
    init();
    let res = fluentreq::get("https://static.test/plain", None).unwrap();
    assert_eq!(res.body(), "https://static.test/plain");
    assert_eq!(res.header("x-echo-method").as_deref(), Some("GET"));

    let req = take_request("https://static.test/plain");
    assert!(req.options.is_empty());
    assert!(req.headers.is_empty());
    assert!(req.cookies.is_empty());
}

#[test]
fn test_static_dispatch_ignores_client_configuration() {
    init();
    let mut client = Client::new("https://configured.test").unwrap();
    client.set_header("X-Client", "yes").set_option("timeout", 60);
    client.get("warm", None).unwrap();

    let options = RequestOptions::new().header("X-Call", "1").option("timeout", 2);
    fluentreq::post("https://static.test/form", options).unwrap();

    let req = take_request("https://static.test/form");
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.headers.get("X-Call"), Some(&Value::from("1")));
    assert!(!req.headers.contains_key("X-Client"));
    assert_eq!(req.options.get("timeout"), Some(&Value::from(2)));
    assert!(!req.options.contains_key("user-agent"));

    let configured = take_request("https://configured.test/warm");
    assert_eq!(configured.options.get("timeout"), Some(&Value::from(60)));
}

#[test]
fn test_static_custom_method_is_uppercased() {
    init();
    fluentreq::request(Method::custom("report"), "https://static.test/report", None).unwrap();
    assert_eq!(
        take_request("https://static.test/report").method.as_str(),
        "REPORT"
    );
}

#[test]
fn test_static_options_shortcut() {
    init();
    let res = fluentreq::options("https://static.test/capabilities", None).unwrap();
    assert_eq!(res.header("x-echo-method").as_deref(), Some("OPTIONS"));
    assert_eq!(
        take_request("https://static.test/capabilities").method,
        Method::Options
    );
}

#[test]
fn test_static_empty_url_is_rejected() {
    init();
    assert!(matches!(
        fluentreq::delete("", None).unwrap_err(),
        Error::MissingUrl
    ));
    assert!(SEEN.lock().unwrap().iter().all(|req| !req.url.is_empty()));
}

#[test]
fn test_client_uses_registered_backend() {
    init();
    let mut client = Client::new("https://registered.test").unwrap();
    let res = client.patch("items/7", None).unwrap();
    assert_eq!(res.to_string(), "https://registered.test/items/7");
    assert_eq!(res.message(), "OK");
}
