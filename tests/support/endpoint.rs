use std::{
    io::{Read, Write},
    net::{TcpListener, TcpStream},
    sync::mpsc::{self, Receiver},
    thread,
    time::{Duration, Instant},
};

use demoform::form::FormController;

/// Raw request received by [`serve_once`] or [`serve_sequence`].
pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

/// Answer a single request with `status` and hand the request back to the test.
pub fn serve_once(status: u16, reason: &str) -> (String, Receiver<CapturedRequest>) {
    serve_sequence(&[(status, reason)])
}

/// Answer one request per entry, in order, on a single address.
pub fn serve_sequence(statuses: &[(u16, &str)]) -> (String, Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let responses: Vec<String> = statuses
        .iter()
        .map(|(status, reason)| {
            format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n{{}}"
            )
        })
        .collect();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for response in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let captured = read_request(&mut stream);
            let _ = stream.write_all(response.as_bytes());
            let _ = stream.flush();
            if tx.send(captured).is_err() {
                return;
            }
        }
    });
    (format!("http://{addr}/f/demo"), rx)
}

/// An address with nothing listening on it.
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/f/demo")
}

/// Poll the controller until its request settles.
pub fn wait_until_settled(controller: &mut FormController) {
    let deadline = Instant::now() + Duration::from_secs(15);
    while controller.is_submitting() {
        assert!(Instant::now() < deadline, "submission never settled");
        controller.poll();
        thread::sleep(Duration::from_millis(10));
    }
}

fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    let header_end = loop {
        let read = stream.read(&mut buf).unwrap_or(0);
        if read == 0 {
            break data.len();
        }
        data.extend_from_slice(&buf[..read]);
        if let Some(pos) = find(&data, b"\r\n\r\n") {
            break pos + 4;
        }
    };
    let head = String::from_utf8_lossy(&data[..header_end.min(data.len())]).into_owned();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    while data.len() < header_end + content_length {
        let read = stream.read(&mut buf).unwrap_or(0);
        if read == 0 {
            break;
        }
        data.extend_from_slice(&buf[..read]);
    }
    let body = String::from_utf8_lossy(&data[header_end.min(data.len())..]).into_owned();
    CapturedRequest { head, body }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
