#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use async_trait::async_trait;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param, query_param_is_missing},
    };

    use crate::{
        api::{
            Client, Request, Transport, TransportResponse,
            request::{API_HOST, CLIENT_NAME, build_request},
        },
        error::{DecodeError, Error, Result},
        models::{QueryOptions, Response},
    };

    const DUCKDUCKGO: &str = include_str!("fixtures/duckduckgo.json");
    const DISAMBIGUATION: &str = include_str!("fixtures/disambiguation.json");

    fn client_for(server: &MockServer) -> Client {
        Client::with_host(server.address().to_string())
    }

    #[tokio::test]
    async fn zero_click_returns_abstract() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("q", "DuckDuckGo"))
            .and(query_param("format", "json"))
            .and(query_param_is_missing("no_html"))
            .and(query_param_is_missing("skip_disambig"))
            .and(query_param_is_missing("no_redirect"))
            .and(header("user-agent", CLIENT_NAME))
            .respond_with(ResponseTemplate::new(200).set_body_string(DUCKDUCKGO))
            .expect(1)
            .mount(&server)
            .await;

        let res = client_for(&server)
            .zero_click("DuckDuckGo", &QueryOptions::default())
            .await
            .unwrap();

        assert_eq!(res.abstract_html(), "DuckDuckGo is an Internet search engine.");
        assert!(res.related_topic_sections().is_empty());
    }

    #[tokio::test]
    async fn options_are_sent_as_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "mercury"))
            .and(query_param("no_html", "1"))
            .and(query_param("skip_disambig", "1"))
            .and(query_param("no_redirect", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Heading": "Mercury"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let options = QueryOptions::default()
            .with_no_html(true)
            .with_skip_disambig(true)
            .with_no_redirect(true);
        let res = client_for(&server)
            .zero_click("mercury", &options)
            .await
            .unwrap();

        assert_eq!(res.heading(), "Mercury");
    }

    #[tokio::test]
    async fn disambiguation_response_has_sections() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(DISAMBIGUATION))
            .mount(&server)
            .await;

        let res = client_for(&server)
            .zero_click("mercury", &QueryOptions::default())
            .await
            .unwrap();

        assert_eq!(res.related_topics().len(), 2);
        assert_eq!(res.related_topic_sections().len(), 2);
    }

    #[tokio::test]
    async fn empty_body_is_an_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let res = client_for(&server)
            .zero_click("", &QueryOptions::default())
            .await
            .unwrap();

        assert_eq!(res, Response::default());
    }

    #[tokio::test]
    async fn empty_object_is_an_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let res = client_for(&server)
            .zero_click("DuckDuckGo", &QueryOptions::default())
            .await
            .unwrap();

        assert_eq!(res, Response::default());
    }

    #[tokio::test]
    async fn error_status_body_is_still_decoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string(r#"{"Heading": "Oops"}"#))
            .mount(&server)
            .await;

        let res = client_for(&server)
            .zero_click("DuckDuckGo", &QueryOptions::default())
            .await
            .unwrap();

        assert_eq!(res.heading(), "Oops");
    }

    #[tokio::test]
    async fn html_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .zero_click("DuckDuckGo", &QueryOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Decode(DecodeError::Json(_))));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let err = Client::with_host(addr.to_string())
            .zero_click("DuckDuckGo", &QueryOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn default_client_targets_the_public_api() {
        let client = Client::default();
        assert_eq!(client.api_host(), API_HOST);

        // Same request the zero-click convenience call sends.
        let req = build_request(client.api_host(), "DuckDuckGo", &QueryOptions::default()).unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://api.duckduckgo.com/?q=DuckDuckGo&format=json"
        );

        assert_eq!(Client::with_host("mirror.example").api_host(), "mirror.example");
    }

    struct StaticTransport(&'static str);

    #[async_trait]
    impl Transport for StaticTransport {
        async fn perform(&self, request: &Request) -> Result<TransportResponse> {
            assert_eq!(request.url().host_str(), Some("mirror.example"));
            Ok(TransportResponse::new(404, self.0.as_bytes().to_vec()))
        }
    }

    #[tokio::test]
    async fn custom_transport_is_used() {
        let client = Client::with_transport(StaticTransport(DISAMBIGUATION)).host("mirror.example");

        let res = client
            .zero_click("mercury", &QueryOptions::default().with_secure(true))
            .await
            .unwrap();

        assert!(res.is_disambiguation());
        assert_eq!(res.related_topic_sections()[0].name(), "Mythology");
    }
}
