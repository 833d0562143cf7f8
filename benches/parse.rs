#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use std::io;

use pullhttp::{parse_request_head, Code, Config, RequestReader};

fn concat(bytes_list: Vec<&[u8]>) -> Vec<u8> {
    bytes_list.iter().flat_map(|b| b.to_vec()).collect()
}

fn concat_lines(bytes_list: Vec<&[u8]>) -> Vec<u8> {
    bytes_list
        .iter()
        .flat_map(|b| concat(vec![b, b"\r\n"]))
        .collect()
}

/// Drains one message and returns the number of tokens seen.
fn tokenize(source: &[u8]) -> usize {
    let mut reader = RequestReader::new();
    let mut count = 0;
    loop {
        reader.advance(source);
        match reader.code() {
            Code::EndOfMessage => return count,
            Code::InsufficientData => panic!("bench input is incomplete"),
            code if code.is_error() => panic!("bench input is invalid"),
            _ => count += 1,
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize short request", |b| {
        let source = concat_lines(vec![
            b"GET /foo/bar HTTP/1.1",
            b"Host: example.com",
            b"Content-Length: 8",
            b"",
            b"httphttp",
        ]);

        b.iter(|| tokenize(black_box(&source)))
    });

    c.bench_function("tokenize long request", |b| {
        let source = concat_lines(vec![
            b"POST /foo/bar?some=parameters HTTP/1.1",
            b"Host: example.com",
            b"X-Some-Header: foo",
            b"Connection: close",
            b"Content-Type: text/plain",
            b"Last-Modified: Thu, 02 Jun 2016 06:01:08 GMT",
            b"Server: rust_http_parser",
            b"Set-Cookie: this is an HTTP parser the quick brown fox jumps over the lazy dog this is a really long cookie lorem ipsum dolor sit amet",
            b"Content-Length: 8",
            b"",
            b"httphttp",
        ]);

        b.iter(|| tokenize(black_box(&source)))
    });

    c.bench_function("tokenize chunked request", |b| {
        let source = concat_lines(vec![
            b"POST /upload HTTP/1.1",
            b"Host: example.com",
            b"Transfer-Encoding: chunked",
            b"",
            b"10",
            b"0123456789abcdef",
            b"10",
            b"0123456789abcdef",
            b"0",
            b"",
        ]);

        b.iter(|| tokenize(black_box(&source)))
    });

    c.bench_function("parse short request head", |b| {
        let source = concat_lines(vec![
            b"GET /foo/bar HTTP/1.1",
            b"Host: example.com",
            b"Content-Length: 8",
            b"",
            b"httphttp",
        ]);

        let config = &Config::DEFAULT;

        b.iter(move || {
            let cursor = io::Cursor::new(&source);
            parse_request_head(cursor, config).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
