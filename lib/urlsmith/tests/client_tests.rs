//! Integration tests for [`Client`] using a recording transport.

use std::future::Future;
use std::sync::{Arc, Mutex};

use assert2::check;
use bytes::Bytes;
use urlsmith::{
    ArrayConfig, ArrayStyle, Client, ClientOptions, ObjectConfig, ObjectStyle, ParamValue,
    QuerySerializer, RequestOptions, Result, Scalar, SerializerOptions, Transport,
    TransportRequest, TransportResponse,
};

/// Transport that records every request and answers 200 with an empty body.
#[derive(Debug, Clone, Default)]
struct RecordingTransport {
    requests: Arc<Mutex<Vec<TransportRequest>>>,
}

impl RecordingTransport {
    fn last_request(&self) -> TransportRequest {
        self.requests
            .lock()
            .expect("lock")
            .last()
            .expect("at least one request")
            .clone()
    }
}

impl Transport for RecordingTransport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse>> + Send {
        let requests = Arc::clone(&self.requests);
        async move {
            requests.lock().expect("lock").push(request);
            Ok(TransportResponse {
                status: 200,
                headers: Vec::new(),
                body: Bytes::new(),
            })
        }
    }
}

fn client(transport: &RecordingTransport, options: ClientOptions) -> Client<RecordingTransport> {
    Client::new(transport.clone(), options)
}

#[tokio::test]
async fn builds_final_url_from_path_and_query_params() {
    let transport = RecordingTransport::default();
    let client = client(&transport, ClientOptions::new().base_url("https://api.test/"));

    client
        .get(
            "/items/{id}",
            RequestOptions::new()
                .path_param("id", 42)
                .query_param("q", "x y"),
        )
        .await
        .expect("response");

    let request = transport.last_request();
    check!(request.url == "https://api.test/items/42?q=x%20y");
    check!(request.method.to_string() == "GET");
}

#[tokio::test]
async fn missing_path_param_is_detectable_in_url() {
    let transport = RecordingTransport::default();
    let client = client(&transport, ClientOptions::new().base_url("https://api.test"));

    client
        .get("/items/{id}", RequestOptions::new())
        .await
        .expect("response");

    check!(transport.last_request().url == "https://api.test/items/{id}");
}

#[tokio::test]
async fn default_content_type_can_be_overridden_and_unset() {
    let transport = RecordingTransport::default();
    let client = client(&transport, ClientOptions::new().base_url("https://api.test"));

    client.get("/a", RequestOptions::new()).await.expect("response");
    let headers = transport.last_request().headers;
    check!(headers == vec![("content-type".to_string(), "application/json".to_string())]);

    client
        .get("/a", RequestOptions::new().header("Content-Type", "text/plain"))
        .await
        .expect("response");
    let headers = transport.last_request().headers;
    check!(headers == vec![("content-type".to_string(), "text/plain".to_string())]);

    client
        .get(
            "/a",
            RequestOptions::new().header("content-type", Scalar::Null),
        )
        .await
        .expect("response");
    check!(transport.last_request().headers.is_empty());
}

#[tokio::test]
async fn header_params_override_request_headers() {
    let transport = RecordingTransport::default();
    let client = client(
        &transport,
        ClientOptions::new()
            .base_url("https://api.test")
            .header("x-api-key", "default"),
    );

    client
        .get(
            "/a",
            RequestOptions::new()
                .header("x-api-key", "request")
                .header_param("x-api-key", "param"),
        )
        .await
        .expect("response");

    let headers = transport.last_request().headers;
    check!(headers.contains(&("x-api-key".to_string(), "param".to_string())));
}

#[tokio::test]
async fn per_request_serializer_options_merge_over_global() {
    let transport = RecordingTransport::default();
    let global = SerializerOptions {
        object: Some(ObjectConfig {
            style: ObjectStyle::Form,
            explode: false,
        }),
        ..SerializerOptions::default()
    };
    let client = client(
        &transport,
        ClientOptions::new()
            .base_url("https://api.test")
            .query_serializer(global),
    );

    let per_request = SerializerOptions {
        array: Some(ArrayConfig {
            style: ArrayStyle::PipeDelimited,
            explode: false,
        }),
        ..SerializerOptions::default()
    };
    let object: urlsmith::ParamMap = [(
        "obj".to_string(),
        ParamValue::Map(
            [("a".to_string(), Scalar::from(1))].into_iter().collect(),
        ),
    )]
    .into_iter()
    .collect();

    let mut options = RequestOptions::new()
        .query_param("id", ParamValue::List(vec![1.into(), 2.into()]))
        .query_serializer(per_request);
    options.params.query.extend(object);

    client.get("/search", options).await.expect("response");
    check!(transport.last_request().url == "https://api.test/search?id=1|2&obj=a,1");
}

#[tokio::test]
async fn prebuilt_serializer_wins_outright() {
    let transport = RecordingTransport::default();
    let client = client(
        &transport,
        ClientOptions::new()
            .base_url("https://api.test")
            .query_serializer(SerializerOptions::default()),
    );

    let custom = QuerySerializer::new(|_| "custom=1".to_string());
    client
        .get(
            "/search",
            RequestOptions::new()
                .query_param("ignored", "x")
                .query_serializer(custom),
        )
        .await
        .expect("response");

    check!(transport.last_request().url == "https://api.test/search?custom=1");
}

#[tokio::test]
async fn json_body_is_passed_to_transport() {
    #[derive(serde::Serialize)]
    struct NewUser {
        name: String,
    }

    let transport = RecordingTransport::default();
    let client = client(&transport, ClientOptions::new().base_url("https://api.test"));

    client
        .post(
            "/users",
            RequestOptions::new()
                .json(&NewUser {
                    name: "alice".to_string(),
                })
                .expect("json"),
        )
        .await
        .expect("response");

    let request = transport.last_request();
    check!(request.method.to_string() == "POST");
    check!(request.body == Some(Bytes::from(r#"{"name":"alice"}"#)));
}
