use pyo3::prelude::*;

mod lens;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(lens::apply_fisheye, m)?)?;
    m.add_function(wrap_pyfunction!(lens::remove_fisheye, m)?)?;
    Ok(())
}
