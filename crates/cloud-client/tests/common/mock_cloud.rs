//! In-process stand-in for the cloud ops API transport
//!
//! Records every physical attempt and answers from a script of gRPC codes:
//! non-OK codes are sent as trailers-only responses, OK as an empty message
//! followed by `grpc-status: 0` trailers.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::future::BoxFuture;
use http::{HeaderMap, HeaderValue};
use http_body::Frame;
use http_body_util::{BodyExt, StreamBody};
use tonic::body::Body;
use tonic::Code;
use tower::Service;

/// One physical attempt seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedCall {
    /// Decode the request message from the gRPC frame.
    pub fn message<M: prost::Message + Default>(&self) -> M {
        assert!(self.body.len() >= 5, "missing gRPC frame header");
        assert_eq!(self.body[0], 0, "unexpected compressed frame");
        M::decode(&self.body[5..]).expect("request message decodes")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn header_count(&self, name: &str) -> usize {
        self.headers.get_all(name).iter().count()
    }
}

#[derive(Default)]
struct State {
    calls: Vec<RecordedCall>,
    script: VecDeque<Code>,
}

/// Mock transport implementing the tower service tonic clients call into.
#[derive(Clone, Default)]
pub struct MockCloudService {
    state: Arc<Mutex<State>>,
}

impl MockCloudService {
    /// Succeed on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the next calls with `codes` in order, then succeed.
    pub fn with_script(codes: impl IntoIterator<Item = Code>) -> Self {
        let mock = Self::default();
        mock.state.lock().unwrap().script = codes.into_iter().collect();
        mock
    }

    /// Answer every call with `code`.
    pub fn always(code: Code) -> Self {
        Self::with_script(std::iter::repeat(code).take(1000))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }
}

fn grpc_status(code: Code) -> HeaderValue {
    HeaderValue::from(code as i32)
}

fn trailers_only(code: Code) -> http::Response<Body> {
    http::Response::builder()
        .header("content-type", "application/grpc")
        .header("grpc-status", grpc_status(code))
        .header("grpc-message", "scripted failure")
        .body(Body::empty())
        .unwrap()
}

fn empty_message() -> http::Response<Body> {
    let mut trailers = HeaderMap::new();
    trailers.insert("grpc-status", grpc_status(Code::Ok));
    let frames: Vec<Result<Frame<Bytes>, Infallible>> = vec![
        Ok(Frame::data(Bytes::from_static(&[0, 0, 0, 0, 0]))),
        Ok(Frame::trailers(trailers)),
    ];

    http::Response::builder()
        .header("content-type", "application/grpc")
        .body(Body::new(StreamBody::new(futures::stream::iter(frames))))
        .unwrap()
}

impl Service<http::Request<Body>> for MockCloudService {
    type Response = http::Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<Body>) -> Self::Future {
        let state = self.state.clone();

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = body.collect().await.unwrap().to_bytes();

            let mut state = state.lock().unwrap();
            state.calls.push(RecordedCall {
                path: parts.uri.path().to_string(),
                headers: parts.headers,
                body,
            });

            let response = match state.script.pop_front() {
                Some(code) if code != Code::Ok => trailers_only(code),
                _ => empty_message(),
            };
            Ok(response)
        })
    }
}
