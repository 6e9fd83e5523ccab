//! A one-shot HTTP endpoint on the loopback interface.

use std::{
    io::{BufRead, BufReader, Read, Write},
    net::{TcpListener, TcpStream},
    thread::{self, JoinHandle},
    time::Duration,
};

pub const API_KEY: &str = "hf_test_key";

/// What the endpoint received.
#[derive(Debug)]
pub struct Recorded {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub struct Endpoint {
    /// Endpoint template pointing at this server.
    pub template: String,
    handle: JoinHandle<Recorded>,
}

impl Endpoint {
    /// Answer a single request with `status` and `body`.
    pub fn reply(status: u16, content_type: &str, body: Vec<u8>) -> Self {
        let mut response = format!(
            "HTTP/1.1 {} Status\r\ncontent-type: {}\r\ncontent-length: {}\r\nx-request-id: test-123\r\nconnection: close\r\n\r\n",
            status,
            content_type,
            body.len()
        )
        .into_bytes();
        response.extend(body);
        Self::spawn(move |mut stream| stream.write_all(&response).unwrap())
    }

    /// Read a single request and keep the connection open without answering.
    pub fn silent(hold: Duration) -> Self {
        Self::spawn(move |_stream| thread::sleep(hold))
    }

    fn spawn(respond: impl FnOnce(TcpStream) + Send + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let template = format!("http://{}/models/{{model}}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let recorded = read_request(&stream);
            respond(stream);
            recorded
        });
        Self { template, handle }
    }

    pub fn recorded(self) -> Recorded {
        self.handle.join().unwrap()
    }
}

fn read_request(stream: &TcpStream) -> Recorded {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();
    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_owned(), value.trim().to_owned()));
        }
    }
    let length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .map_or(0, |(_, v)| v.parse().unwrap());
    let mut body = vec![0; length];
    reader.read_exact(&mut body).unwrap();
    Recorded {
        request_line: request_line.trim_end().to_owned(),
        headers,
        body,
    }
}

/// A small PNG the endpoint can hand out.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 30) as u8, (y * 40) as u8, 128])
    });
    let mut buffer = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(image)
        .write_to(&mut buffer, image::ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}
