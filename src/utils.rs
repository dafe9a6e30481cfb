/// implement [packbytes] conversions for a [bilge] bitfield struct, so it can be sent on the wire as its underlying integer
#[macro_export]
macro_rules! pack_bilge {
    ($t:ty) => {
    
        impl packbytes::ToBytes for $t {
            type Bytes = [u8; core::mem::size_of::<$t>()];
            
            fn to_le_bytes(self) -> Self::Bytes {
                self.value.to_le_bytes()
            }
            fn to_be_bytes(self) -> Self::Bytes {
                self.value.to_be_bytes()
            }
        }
        impl packbytes::FromBytes for $t {
            type Bytes = [u8; core::mem::size_of::<$t>()];
            
            fn from_le_bytes(bytes: Self::Bytes) -> Self {
                <$t>::from(<$t as bilge::Bitsized>::ArbitraryInt::from_le_bytes(bytes))
            }
            fn from_be_bytes(bytes: Self::Bytes) -> Self {
                <$t>::from(<$t as bilge::Bitsized>::ArbitraryInt::from_be_bytes(bytes))
            }
        }
    };
}

/// hexadecimal display of raw bytes for log messages
pub(crate) struct Hex<'d>(pub &'d [u8]);

impl core::fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i != 0 
                {f.write_str(" ")?;}
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
