//! "Bit bang" serial transport for the ST7920
//!
//! The ST7920 samples SID on the rising edge of SCLK, most significant bit first, which is
//! SPI MODE_0. Unlike a regular SPI device there is no chip select toggling per transfer:
//! RS doubles as CS in serial mode, the display driver raises it once at reset and leaves it
//! high. Every value still takes 24 clocks since the driver frames it into 3 bytes.

use core::marker::PhantomData;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::blocking::spi::Write as SpiWrite;
use embedded_hal::digital::v2::OutputPin;

/// "Bit bang" serial implementation over two GPIOs.
/// Use when you don't want to sacrifice a SPI port, the display doesn't need speed.
pub struct BitBangSpi<ERR, SCLK, SID, DELAY> {
    sclk: SCLK,
    sid: SID,
    delay: DELAY,
    _phantom: PhantomData<ERR>,
}

/// Used to run without delay on a slow enough core, where a GPIO toggle alone takes longer
/// than the 200ns SCLK high/low time of the ST7920
pub struct NoDelay {}

impl DelayUs<u32> for NoDelay {
    #[inline]
    fn delay_us(&mut self, _us: u32) {}
}

impl<ERR, SCLK, SID> BitBangSpi<ERR, SCLK, SID, NoDelay>
where
    SCLK: OutputPin<Error = ERR>,
    SID: OutputPin<Error = ERR>,
{
    /// Constructs a "bit bang" transport from the "serial clock" (E) and "serial data" (R/W)
    /// pins. If your core toggles GPIOs faster than 2.5MHz please consider `new_with_delay`,
    /// otherwise the controller misses bits.
    pub fn new(mut sclk: SCLK, sid: SID) -> Result<BitBangSpi<ERR, SCLK, SID, NoDelay>, ERR> {
        sclk.set_low()?;
        Ok(BitBangSpi {
            sclk,
            sid,
            delay: NoDelay {},
            _phantom: PhantomData,
        })
    }
}

impl<ERR, SCLK, SID, DELAY> BitBangSpi<ERR, SCLK, SID, DELAY>
where
    SCLK: OutputPin<Error = ERR>,
    SID: OutputPin<Error = ERR>,
    DELAY: DelayUs<u32>,
{
    /// Constructs a "bit bang" transport with a 1µs delay per clock phase.
    ///
    /// ```ignore
    /// let timer = hal::Timer::new(pac.TIMER, &mut pac.RESETS);
    ///
    /// let lcd_spi = BitBangSpi::new_with_delay(
    ///     lcd_sclk,
    ///     lcd_sid,
    ///     timer,
    /// ).unwrap();
    /// ```
    pub fn new_with_delay(
        mut sclk: SCLK,
        sid: SID,
        delay: DELAY,
    ) -> Result<BitBangSpi<ERR, SCLK, SID, DELAY>, ERR> {
        sclk.set_low()?;
        Ok(BitBangSpi {
            sclk,
            sid,
            delay,
            _phantom: PhantomData,
        })
    }

    /// gives back the pins and the delay
    pub fn release(self) -> (SCLK, SID, DELAY) {
        (self.sclk, self.sid, self.delay)
    }

    #[inline]
    fn write_bit(&mut self, high: bool) -> Result<(), ERR> {
        if high {
            self.sid.set_high()?;
        } else {
            self.sid.set_low()?;
        }
        self.sclk.set_high()?;
        self.delay.delay_us(1);
        self.sclk.set_low()?;
        self.delay.delay_us(1);
        Ok(())
    }
}

impl<ERR, SCLK, SID, DELAY> SpiWrite<u8> for BitBangSpi<ERR, SCLK, SID, DELAY>
where
    SCLK: OutputPin<Error = ERR>,
    SID: OutputPin<Error = ERR>,
    DELAY: DelayUs<u32>,
{
    type Error = ERR;

    #[inline]
    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        for value in words {
            let mut v = *value;
            for _ in 0..8 {
                self.write_bit((v & 0x80) == 0x80)?;
                v <<= 1;
            }
        }
        Ok(())
    }
}
