#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use ridlereport::config::Config;
use ridlereport::errors::AppResult;
use ridlereport::models::ActivityRecord;
use ridlereport::transport::{Delivery, Transport};
use std::cell::RefCell;
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

pub const HEADER: &str = "Start Time (Local),Shift Code,Driver,Idle Time";

/// Binary under test, isolated from any webhook configured on the host.
pub fn rir() -> Command {
    let mut cmd = cargo_bin_cmd!("ridlereport");
    cmd.env_remove("WEBHOOK_URL");
    cmd
}

/// Unique path inside the system temp dir, any existing file removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ridlereport.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV with the default header and the given data lines.
pub fn write_csv(name: &str, lines: &[&str]) -> String {
    let path = temp_path(name, "csv");
    let mut content = String::from(HEADER);
    for l in lines {
        content.push('\n');
        content.push_str(l);
    }
    content.push('\n');
    fs::write(&path, content).expect("write csv fixture");
    path
}

pub fn write_config(name: &str, yaml: &str) -> String {
    let path = temp_path(name, "conf");
    fs::write(&path, yaml).expect("write config fixture");
    path
}

/// Three moves on 2025-03-04, one shift, two drivers.
pub fn small_day_lines() -> Vec<&'static str> {
    vec![
        "2025-03-04 08:10:00,SITE-1430,Alice,0.5",
        "2025-03-04 09:00:00,SITE-1430,Bob,1.5",
        "2025-03-04 09:45:00,SITE-1430,Bob,0.5",
        "2025-03-03 23:59:00,SITE-1430,Alice,9.0",
    ]
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

pub fn rec(at: &str, shift: &str, driver: &str, idle: f64) -> ActivityRecord {
    ActivityRecord::new(ts(at), shift, driver, idle)
}

pub fn test_config() -> Config {
    Config {
        message_delay_ms: 0,
        ..Config::default()
    }
}

/// Keeps every payload in memory.
#[derive(Default)]
pub struct RecordingTransport {
    pub sent: RefCell<Vec<String>>,
}

impl Transport for RecordingTransport {
    fn send(&self, text: &str) -> AppResult<Delivery> {
        self.sent.borrow_mut().push(text.to_string());
        Ok(Delivery::Sent)
    }
}

/// Serve a single HTTP request with the given status line and body.
/// Returns the endpoint URL and a handle yielding the raw request received.
pub fn one_shot_server(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let url = format!("http://{}/hook", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept connection");
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().ok();
        request
    });

    (url, handle)
}

/// Read headers plus a Content-Length body.
fn read_request(stream: &mut std::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(end) = text.find("\r\n\r\n") {
            let body_len = text[..end]
                .lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    k.trim()
                        .eq_ignore_ascii_case("content-length")
                        .then(|| v.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}
