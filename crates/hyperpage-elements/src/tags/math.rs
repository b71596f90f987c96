//! MathML element functions.

define_elements! {
	/// Every MathML tag with a function in this module.
	MATH_TAGS;

	math => "math",
	annotation => "annotation",
	annotation_xml => "annotation-xml",
	merror => "merror",
	mfrac => "mfrac",
	mi => "mi",
	mmultiscripts => "mmultiscripts",
	mn => "mn",
	mo => "mo",
	mover => "mover",
	mpadded => "mpadded",
	mphantom => "mphantom",
	mprescripts => "mprescripts",
	mroot => "mroot",
	mrow => "mrow",
	ms => "ms",
	mspace => "mspace",
	msqrt => "msqrt",
	mstyle => "mstyle",
	msub => "msub",
	msubsup => "msubsup",
	msup => "msup",
	mtable => "mtable",
	mtd => "mtd",
	mtext => "mtext",
	mtr => "mtr",
	munder => "munder",
	munderover => "munderover",
	semantics => "semantics",
}
