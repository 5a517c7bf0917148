//! Physical pin identifiers
//!
//! SAM0 parts number their pins port-linearly: PA00-PA31 are 0-31 and
//! PB00-PB31 are 32-63. The pin multiplexer and the vendor AIN tables both
//! use this numbering.

/// Pins per GPIO port
pub const PINS_PER_PORT: u8 = 32;

/// GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
}

impl Port {
    /// Port letter as used in pin names
    pub fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'A' => Some(Port::A),
            'B' => Some(Port::B),
            _ => None,
        }
    }
}

/// Physical GPIO pin, port-linear
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GpioPin(u8);

impl GpioPin {
    /// Create a pin from its port and number within the port
    ///
    /// Returns `None` if `number` does not fit in a port.
    pub const fn new(port: Port, number: u8) -> Option<Self> {
        if number >= PINS_PER_PORT {
            return None;
        }
        let base = match port {
            Port::A => 0,
            Port::B => PINS_PER_PORT,
        };
        Some(Self(base + number))
    }

    /// Create a pin from its port-linear id
    pub const fn from_id(id: u8) -> Option<Self> {
        if id >= 2 * PINS_PER_PORT {
            return None;
        }
        Some(Self(id))
    }

    /// Port A pin, for use in const tables
    ///
    /// Panics if `number > 31`; in a const table that is a build error.
    pub const fn pa(number: u8) -> Self {
        assert!(number < PINS_PER_PORT);
        Self(number)
    }

    /// Port B pin, for use in const tables
    pub const fn pb(number: u8) -> Self {
        assert!(number < PINS_PER_PORT);
        Self(PINS_PER_PORT + number)
    }

    /// Port-linear pin id
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Port this pin belongs to
    pub const fn port(self) -> Port {
        if self.0 < PINS_PER_PORT {
            Port::A
        } else {
            Port::B
        }
    }

    /// Pin number within its port
    pub const fn number(self) -> u8 {
        self.0 % PINS_PER_PORT
    }

    /// Parse a pin string
    ///
    /// Supports formats:
    /// - "PA4" or "PA04" -> Port A, pin 4
    /// - "pb03" -> Port B, pin 3
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let mut chars = s.chars();

        if !chars.next()?.eq_ignore_ascii_case(&'P') {
            return None;
        }
        let port = Port::from_letter(chars.next()?.to_ascii_uppercase())?;

        let pin_str = chars.as_str();
        if pin_str.is_empty() || pin_str.len() > 2 || !pin_str.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: u8 = pin_str.parse().ok()?;

        Self::new(port, number)
    }
}

impl core::fmt::Display for GpioPin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "P{}{:02}", self.port().letter(), self.number())
    }
}
