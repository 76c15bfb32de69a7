use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener};
use std::thread;
use std::time::Duration;

use super::*;
use crate::error::{AppError, AppResult, HttpError};

fn closed_port_url() -> AppResult<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}/", addr))
}

fn one_shot_server(status_line: &'static str) -> AppResult<(String, thread::JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let handle = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buffer = [0u8; 1024];
            if stream.read(&mut buffer).is_err() {
                return;
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Length: 4\r\nConnection: close\r\n\r\nbody",
                status_line
            );
            if stream.write_all(response.as_bytes()).is_err() {
                return;
            }
            drop(stream.flush());
            drop(stream.shutdown(Shutdown::Both));
        }
    });
    Ok((format!("http://{}/", addr), handle))
}

/// Answers 200 with a chunked body that keeps streaming until the client goes away.
fn endless_stream_server() -> AppResult<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buffer = [0u8; 1024];
            if stream.read(&mut buffer).is_err() {
                return;
            }
            let head = "HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n";
            if stream.write_all(head.as_bytes()).is_err() {
                return;
            }
            for _ in 0..400 {
                if stream.write_all(b"5\r\nhello\r\n").is_err() || stream.flush().is_err() {
                    return;
                }
                thread::sleep(Duration::from_millis(50));
            }
        }
    });
    Ok(format!("http://{}/", addr))
}

#[tokio::test(flavor = "current_thread")]
async fn streaming_body_does_not_hold_back_status() -> AppResult<()> {
    let url = endless_stream_server()?;
    let transport = ReqwestTransport::new()?;
    match tokio::time::timeout(Duration::from_secs(3), transport.get_status(&url)).await {
        Ok(Ok(200)) => Ok(()),
        Ok(other) => Err(AppError::validation(format!("Expected Ok(200), got {:?}", other))),
        Err(_) => Err(AppError::validation(
            "Status was not returned while the body kept streaming",
        )),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn malformed_url_fails_at_build_time() -> AppResult<()> {
    let transport = ReqwestTransport::new()?;
    match transport.get_status("not a url").await {
        Err(HttpError::BuildRequestFailed { url, .. }) if url == "not a url" => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected BuildRequestFailed, got {:?}",
            other
        ))),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn refused_connection_is_a_request_failure() -> AppResult<()> {
    let transport = ReqwestTransport::new()?;
    let url = closed_port_url()?;
    match transport.get_status(&url).await {
        Err(HttpError::RequestFailed { .. }) => Ok(()),
        other => Err(AppError::validation(format!(
            "Expected RequestFailed, got {:?}",
            other
        ))),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn non_200_status_is_returned_verbatim() -> AppResult<()> {
    let (url, server) = one_shot_server("404 Not Found")?;
    let transport = ReqwestTransport::new()?;
    let status = transport.get_status(&url).await?;
    drop(server.join());
    if status != 404 {
        return Err(AppError::validation(format!("Expected 404, got {}", status)));
    }
    Ok(())
}
