error_chain!{
    errors {
        Encoding {
            description("malformed base64 key encoding")
            display("malformed base64 key encoding")
        }
        PemDecode {
            description("failed to decode PEM block")
            display("failed to decode PEM block")
        }
        KeyType(found: String) {
            description("not an RSA private key")
            display("not an RSA private key (PEM block type {:?})", found)
        }
        KeyFormat(reason: String) {
            description("invalid PKCS#1 RSA private key")
            display("invalid PKCS#1 RSA private key: {}", reason)
        }
        Signing(reason: String) {
            description("failed to sign message")
            display("failed to sign message: {}", reason)
        }
        PublicKeyFormat(reason: String) {
            description("invalid PKCS#1 RSA public key")
            display("invalid PKCS#1 RSA public key: {}", reason)
        }
        InvalidSignature {
            description("signature does not match message")
            display("signature does not match message")
        }
    }
}
