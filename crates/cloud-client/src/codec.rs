//! Request codec for the cloud service stub.
//!
//! Wraps the prost codec and runs the [`IdempotencyKeyInterceptor`] on each
//! request message right before it is serialized. tonic encodes a unary
//! request exactly once, so the key is fixed for the logical call no matter
//! how many times the encoded bytes are sent.

use std::marker::PhantomData;

use tonic::codec::{BufferSettings, Codec, EncodeBuf, Encoder};
use tonic::Status;
use tonic_prost::ProstCodec;

use crate::idempotency::{IdempotencyKeyInterceptor, IdempotentRequest};

/// Prost codec with idempotency-key injection on the encode side.
pub struct CloudCodec<T, U> {
    inner: ProstCodec<T, U>,
    idempotency: IdempotencyKeyInterceptor,
}

impl<T, U> Default for CloudCodec<T, U> {
    fn default() -> Self {
        Self {
            inner: ProstCodec::default(),
            idempotency: IdempotencyKeyInterceptor::default(),
        }
    }
}

impl<T, U> Codec for CloudCodec<T, U>
where
    T: prost::Message + IdempotentRequest + Send + 'static,
    U: prost::Message + Default + Send + 'static,
{
    type Encode = T;
    type Decode = U;
    type Encoder = CloudEncoder<T, <ProstCodec<T, U> as Codec>::Encoder>;
    type Decoder = <ProstCodec<T, U> as Codec>::Decoder;

    fn encoder(&mut self) -> Self::Encoder {
        CloudEncoder {
            inner: self.inner.encoder(),
            idempotency: self.idempotency.clone(),
            _message: PhantomData,
        }
    }

    fn decoder(&mut self) -> Self::Decoder {
        self.inner.decoder()
    }
}

/// Encoder that fills the idempotency key before delegating to prost.
#[derive(Debug)]
pub struct CloudEncoder<T, E> {
    inner: E,
    idempotency: IdempotencyKeyInterceptor,
    _message: PhantomData<fn(T)>,
}

impl<T, E> Encoder for CloudEncoder<T, E>
where
    T: IdempotentRequest,
    E: Encoder<Item = T, Error = Status>,
{
    type Item = T;
    type Error = Status;

    fn encode(&mut self, mut item: T, dst: &mut EncodeBuf<'_>) -> Result<(), Status> {
        self.idempotency.intercept(&mut item);
        self.inner.encode(item, dst)
    }

    fn buffer_settings(&self) -> BufferSettings {
        self.inner.buffer_settings()
    }
}
