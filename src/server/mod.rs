use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

pub mod api;
pub mod routes;

pub fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    println!("yogg server listening on http://{bind_addr}");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream) {
                    eprintln!("request failed: {err}");
                }
            }
            Err(err) => eprintln!("accept failed: {err}"),
        }
    }

    Ok(())
}

fn handle_connection(stream: &mut TcpStream) -> std::io::Result<()> {
    let mut buffer = [0_u8; 16_384];
    let bytes_read = stream.read(&mut buffer)?;
    if bytes_read == 0 {
        return Ok(());
    }

    let request = String::from_utf8_lossy(&buffer[..bytes_read]);
    let (method, path, body) = parse_request(&request);
    let response = routes::route_request(method, path, body).to_http_string();
    stream.write_all(response.as_bytes())?;
    stream.flush()?;
    Ok(())
}

/// Pull method, path, and body out of a raw HTTP/1.1 request. Tolerates
/// bare-LF header separators from hand-written clients.
fn parse_request(raw: &str) -> (&str, &str, &str) {
    let request_line = raw.lines().next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("GET");
    let path = parts.next().unwrap_or("/");

    let body = raw
        .split("\r\n\r\n")
        .nth(1)
        .or_else(|| raw.split("\n\n").nth(1))
        .unwrap_or("");

    (method, path, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_request_splits_method_path_and_body() {
        let raw = "POST /api/simulate HTTP/1.1\r\nHost: x\r\nContent-Type: application/json\r\n\r\n{\"minions\":[]}";
        assert_eq!(
            parse_request(raw),
            ("POST", "/api/simulate", "{\"minions\":[]}")
        );
    }

    #[test]
    fn parse_request_accepts_bare_lf_separators() {
        let raw = "POST /api/simulate HTTP/1.1\nHost: x\n\n{}";
        assert_eq!(parse_request(raw), ("POST", "/api/simulate", "{}"));
    }

    #[test]
    fn parse_request_defaults_on_garbage() {
        assert_eq!(parse_request(""), ("GET", "/", ""));
    }
}
