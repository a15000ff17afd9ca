mod common;

mod tests {
    use myrtio_ring_lamp::http::{HttpMethod, ResponseHeaders, parse_request_line, respond};
    use myrtio_ring_lamp::{CommandQueue, LampService, LampView, PatternId, ViewCell};

    use crate::common::{RecordingDriver, controller, ms};

    fn request(service: &mut LampService<'_, RecordingDriver>, head: &str) -> (u16, String) {
        let mut out = String::new();
        let status = respond(service, head, ms(0), &mut out).unwrap();
        (status, out)
    }

    fn split_response(response: &str) -> (&str, &str) {
        response
            .split_once("\r\n\r\n")
            .expect("response without header terminator")
    }

    fn content_length(headers: &str) -> usize {
        headers
            .lines()
            .find_map(|line| line.strip_prefix("Content-Length: "))
            .expect("missing Content-Length")
            .parse()
            .unwrap()
    }

    #[test]
    fn test_parse_request_line() {
        assert_eq!(
            parse_request_line("GET /on HTTP/1.1\r\nHost: lamp\r\n\r\n"),
            Some((HttpMethod::Get, "/on"))
        );
        assert_eq!(
            parse_request_line("POST /color/3 HTTP/1.1"),
            Some((HttpMethod::Post, "/color/3"))
        );
        assert_eq!(parse_request_line("BREW /pot HTTP/1.1"), None);
        assert_eq!(parse_request_line("GET"), None);
    }

    #[test]
    fn test_response_headers() {
        let mut out = String::new();
        ResponseHeaders::not_found()
            .with_length(9)
            .write_to(&mut out)
            .unwrap();
        assert_eq!(
            out,
            "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 9\r\nConnection: close\r\n\r\n"
        );
    }

    #[test]
    fn test_index_renders_page() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let view = ViewCell::new(LampView::default());
        let mut service = LampService::new(controller(), &queue, &view);

        let (status, response) = request(&mut service, "GET / HTTP/1.1\r\n\r\n");
        assert_eq!(status, 200);

        let (headers, body) = split_response(&response);
        assert!(headers.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(headers.contains("Content-Type: text/html; charset=utf-8"));
        assert_eq!(content_length(headers), body.len());
        assert!(body.contains("<title>Eperly - Lite</title>"));
        assert!(body.contains("Lamp ON"));
        assert!(body.contains("Brightness = 50%"));
        assert!(body.contains("href='/color/39'"));
        assert!(!service.controller().state().is_on());
    }

    #[test]
    fn test_route_runs_before_render() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let view = ViewCell::new(LampView::default());
        let mut service = LampService::new(controller(), &queue, &view);

        let (status, response) = request(&mut service, "GET /on HTTP/1.1\r\n\r\n");
        assert_eq!(status, 200);
        assert!(service.controller().state().is_on());
        assert!(response.contains("Lamp OFF"));

        let (_, response) = request(&mut service, "GET /color/7 HTTP/1.1\r\n\r\n");
        assert!(response.contains("R = 255"));
        assert!(response.contains("G = 255"));
        assert!(response.contains("B = 255"));

        let (_, response) = request(&mut service, "GET /rotate HTTP/1.1\r\n\r\n");
        assert!(response.contains("class='sel'>Rotate"));
        assert_eq!(view.get().pattern, PatternId::Rotate);
    }

    #[test]
    fn test_unknown_route_is_not_found() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let view = ViewCell::new(LampView::default());
        let mut service = LampService::new(controller(), &queue, &view);

        let (status, response) = request(&mut service, "GET /color/abc HTTP/1.1\r\n\r\n");
        assert_eq!(status, 404);
        let (headers, body) = split_response(&response);
        assert_eq!(body, "Not Found");
        assert_eq!(content_length(headers), body.len());
        assert!(service.controller().driver().frames.is_empty());
    }

    #[test]
    fn test_only_get_mutates() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let view = ViewCell::new(LampView::default());
        let mut service = LampService::new(controller(), &queue, &view);

        let (status, _) = request(&mut service, "POST /on HTTP/1.1\r\n\r\n");
        assert_eq!(status, 405);
        let (status, _) = request(&mut service, "HEAD /on HTTP/1.1\r\n\r\n");
        assert_eq!(status, 405);
        assert!(!service.controller().state().is_on());
    }

    #[test]
    fn test_garbage_request_line() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let view = ViewCell::new(LampView::default());
        let mut service = LampService::new(controller(), &queue, &view);

        let (status, response) = request(&mut service, "hello\r\n\r\n");
        assert_eq!(status, 400);
        assert!(response.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    }
}
