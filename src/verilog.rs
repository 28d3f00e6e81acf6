// src/verilog.rs

use crate::network::NetworkPlan;
use crate::stages::ButterflyUnit;
use alloc::string::String;
use core::fmt::{self, Write};

/// 16-bit lane of a flattened signal vector: index i occupies bits
/// [16*i : 16*i + 15]. 1-D vectors only, since only those synthesize.
struct Lane(usize);

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lsb = self.0 * 16;
        write!(f, "{}:{}", lsb, lsb + 15)
    }
}

/// Renders `plan` as a flat synthesizable module named `auto_<N>_fft`.
///
/// Ports and stage-boundary wires are `[0:16N-1]` vectors (one Q8.8 lane per
/// signal, real and imaginary planes separate); each twiddle index gets a
/// 16-bit constant wire pair; each butterfly unit becomes one `bf` instance.
/// Pure substitution over the plan, no computation.
pub fn write_module<W: Write>(out: &mut W, plan: &NetworkPlan) -> fmt::Result {
    let n = plan.size();
    let msb = n * 16 - 1;
    let last = plan.stage_count();

    writeln!(
        out,
        "module auto_{n}_fft(input [0:{msb}] inp_r, input [0:{msb}] inp_i, \
         output [0:{msb}] out_r, output [0:{msb}] out_i);"
    )?;
    writeln!(out)?;

    for boundary in 0..=last {
        writeln!(out, "\twire [0:{msb}] s{boundary}_out_r;")?;
        writeln!(out, "\twire [0:{msb}] s{boundary}_out_i;")?;
    }
    writeln!(out)?;

    writeln!(out, "\tassign s0_out_r = inp_r;")?;
    writeln!(out, "\tassign s0_out_i = inp_i;")?;
    writeln!(out)?;

    write_twiddle_wires(out, plan)?;
    write_twiddle_constants(out, plan)?;

    for stage in plan.stages() {
        writeln!(out, "\t// stage {}", stage.stage)?;
        for unit in &stage.units {
            write_unit(out, unit)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "\tassign out_r = s{last}_out_r;")?;
    writeln!(out, "\tassign out_i = s{last}_out_i;")?;
    writeln!(out)?;
    writeln!(out, "endmodule")
}

/// Convenience wrapper collecting the module text into a `String`.
pub fn emit_module(plan: &NetworkPlan) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = write_module(&mut text, plan);
    text
}

fn write_twiddle_wires<W: Write>(out: &mut W, plan: &NetworkPlan) -> fmt::Result {
    for part in ["r", "i"] {
        write!(out, "\twire [15:0] ")?;
        for k in 0..plan.twiddles().len() {
            if k > 0 {
                write!(out, ", ")?;
            }
            write!(out, "w{k}_{part}")?;
        }
        writeln!(out, ";")?;
    }
    writeln!(out)
}

fn write_twiddle_constants<W: Write>(out: &mut W, plan: &NetworkPlan) -> fmt::Result {
    writeln!(out, "\t// twiddle constants, Q8.8")?;
    for (k, c) in plan.twiddles().iter().enumerate() {
        writeln!(out, "\tassign w{k}_r = 16'h{:X};", c.re)?;
        writeln!(out, "\tassign w{k}_i = 16'h{:X};", c.im)?;
    }
    writeln!(out)
}

fn write_unit<W: Write>(out: &mut W, unit: &ButterflyUnit) -> fmt::Result {
    let s = unit.stage;
    let p = s - 1;
    let lo = unit.lo;
    let t = unit.twiddle;
    let a = Lane(unit.lo);
    let b = Lane(unit.hi);

    writeln!(
        out,
        "\tbf s{s}_{lo} (.a(s{p}_out_r[{a}]), .b(s{p}_out_i[{a}]), \
         .c(s{p}_out_r[{b}]), .d(s{p}_out_i[{b}]), \
         .w_r(w{t}_r), .w_i(w{t}_i), \
         .out1_r(s{s}_out_r[{a}]), .out1_i(s{s}_out_i[{a}]), \
         .out2_r(s{s}_out_r[{b}]), .out2_i(s{s}_out_i[{b}]));"
    )
}

#[cfg(test)]
#[path = "verilog_tests.rs"]
mod tests;
