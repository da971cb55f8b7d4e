use tonic::codec::CompressionEncoding;

/// Message size limit for both directions (8MB)
pub const MAX_MESSAGE_SIZE: usize = 8 * 1024 * 1024;

/// Builder surface shared by tonic-generated clients.
///
/// Generated clients expose these as inherent methods; implement the trait for
/// each client (see `rpc::configurable_client!`) to use [`configure_client`].
pub trait ConfigurableClient: Sized {
    fn accept_compressed(self, encoding: CompressionEncoding) -> Self;

    fn send_compressed(self, encoding: CompressionEncoding) -> Self;

    fn max_decoding_message_size(self, limit: usize) -> Self;

    fn max_encoding_message_size(self, limit: usize) -> Self;
}

/// Apply the workspace client defaults: zstd both ways and 8MB limits.
pub fn configure_client<T>(client: T) -> T
where
    T: ConfigurableClient,
{
    client
        .accept_compressed(CompressionEncoding::Zstd)
        .send_compressed(CompressionEncoding::Zstd)
        .max_decoding_message_size(MAX_MESSAGE_SIZE)
        .max_encoding_message_size(MAX_MESSAGE_SIZE)
}
