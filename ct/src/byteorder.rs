/// Byte order used when marshaling field/scalar values to and from bytes.
///
/// Conversion routines parameterized on this enum never branch on the
/// *value* being converted, only on this compile-time-known selector.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ByteOrder {
    /// Most significant byte first.
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}
