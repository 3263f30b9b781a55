//! Plain-text exports of traced field lines.
//!
//! One-way writers for external plotting collaborators: a flat CSV
//! table and a legacy ASCII VTK polydata file loadable in ParaView.
//! Neither is a persistence format; the crate never reads them back.

use std::io::{self, Write};

use crate::trace::FieldLine;

/// Writes field lines as `line,vertex,x,y` CSV rows.
pub fn write_field_lines_csv<W: Write>(mut w: W, lines: &[FieldLine]) -> io::Result<()> {
    writeln!(w, "line,vertex,x,y")?;
    for (line_index, line) in lines.iter().enumerate() {
        for (vertex_index, p) in line.points.iter().enumerate() {
            writeln!(w, "{},{},{:.16e},{:.16e}", line_index, vertex_index, p.x, p.y)?;
        }
    }
    Ok(())
}

/// Writes field lines as legacy ASCII VTK polydata (z = 0 plane).
pub fn write_field_lines_vtk<W: Write>(
    mut w: W,
    title: &str,
    lines: &[FieldLine],
) -> io::Result<()> {
    writeln!(w, "# vtk DataFile Version 3.0")?;
    writeln!(w, "{title}")?;
    writeln!(w, "ASCII")?;
    writeln!(w, "DATASET POLYDATA")?;

    let total_points: usize = lines.iter().map(|l| l.points.len()).sum();
    writeln!(w, "POINTS {total_points} double")?;
    for line in lines {
        for p in &line.points {
            writeln!(w, "{:.16e} {:.16e} 0.0", p.x, p.y)?;
        }
    }

    // Each cell row holds its vertex count followed by point indices.
    let cell_list_size: usize = lines.iter().map(|l| l.points.len() + 1).sum();
    writeln!(w, "LINES {} {}", lines.len(), cell_list_size)?;
    let mut base = 0usize;
    for line in lines {
        write!(w, "{}", line.points.len())?;
        for offset in 0..line.points.len() {
            write!(w, " {}", base + offset)?;
        }
        writeln!(w)?;
        base += line.points.len();
    }
    Ok(())
}
