//! VSOP87C series for Neptune: heliocentric X, Y, Z on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const X0: &[Term] = &[
    [30.0597310058, 5.31188633083, 38.3768531213],
    [0.40567587218, 3.98149970131, 0.2438174835],
    [0.13506026414, 3.50055820972, 76.50988875911],
    [0.15716341901, 0.11310077968, 36.892380413],
    [0.14935642614, 1.08477702063, 39.86132582961],
    [0.02590782232, 1.99609768221, 1.7282901918],
    [0.01073890204, 5.38477153556, 75.0254160508],
    [0.00816388197, 0.78185518038, 3.21276290011],
    [0.00702768075, 1.45363642119, 35.40790770471],
    [0.00687594822, 0.72075739344, 37.88921815429],
    [0.00565555652, 5.98943773879, 41.3457985379],
    [0.00495650075, 0.59957534348, 529.9347825781],
    [0.0030602538, 0.3991678814, 73.5409433425],
    [0.00272446904, 0.87404115637, 213.5429129215],
    [0.00135892298, 5.54654979922, 77.9943614674],
    [0.00122117697, 1.30863876781, 34.9202727377],
    [0.00090968285, 1.68886748674, 114.6429243969],
    [0.000689154, 5.834703744, 4.6972356084],
    [0.0004037068, 2.66129691063, 33.9234349964],
    [0.00028891307, 4.78947715515, 42.83027124621],
    [0.00029247752, 1.62319522731, 72.05647063421],
    [0.00025576289, 1.48342967006, 71.5688356672],
    [0.00020517968, 2.55621077117, 33.43580002939],
    [0.00012614154, 3.56929744338, 113.15845168861],
    [0.00012788929, 2.73769634046, 111.67397898031],
    [0.00012013477, 0.94915799508, 1059.6257476727],
    [0.00009854638, 0.2571364124, 36.404745446],
    [0.00008385825, 1.65242210861, 108.2173985967],
    [0.00007577585, 0.09970777629, 426.8420083595],
    [0.00006452053, 4.62556526073, 6.1817083167],
    [0.00006551074, 1.9188405079, 1.24065522479],
    [0.00004652534, 0.10344003066, 37.8555882595],
    [0.00004732958, 4.09711900918, 79.47883417571],
    [0.00004557247, 1.09712661798, 38.89811798311],
    [0.0000432255, 2.37744779374, 38.32866901151],
    [0.00004315539, 5.10473140788, 38.4250372311],
    [0.00004089036, 1.99429063701, 37.4136452748],
    [0.00004248658, 5.63379709294, 28.81562556571],
    [0.00004622142, 2.73995451568, 70.08436295889],
    [0.00003926447, 5.48975060892, 39.34006096781],
    [0.00003148422, 5.18755364576, 76.0222537921],
    [0.00003940981, 2.29766376691, 98.6561710411],
    [0.00003323363, 4.68776245279, 4.4366031775],
    [0.00003282964, 2.81551282614, 39.3736908626],
    [0.00003110464, 1.84416897204, 47.9380806769],
    [0.00002927062, 2.83767313961, 70.5719979259],
    [0.00002748919, 3.86990252936, 32.4389622881],
    [0.00003316668, 1.821940842, 144.8659615262],
    [0.00002822405, 3.78131048254, 31.9513273211],
    [0.00002695972, 3.85276301548, 110.189506272],
    [0.0000252299, 4.66308619966, 311.9552664791],
    [0.00001888129, 3.2046468323, 35.9291725665],
    [0.00001648229, 4.07040254381, 30.300098274],
    [0.00001826545, 3.58021128918, 44.31474395451],
    [0.00001956241, 4.14516146871, 206.42936592071],
    [0.00001681257, 4.2756012777, 40.8245336761],
    [0.00001533383, 1.17732213608, 38.26497853671],
    [0.00001893076, 0.75017402977, 220.6564599223],
    [0.00001527526, 0.02173638301, 38.4887277059],
    [0.00002085691, 1.56948272604, 149.8070146181],
    [0.00002070612, 2.82581806721, 136.78920667889],
    [0.00001535699, 0.61413315675, 73.0533083755],
    [0.00001667976, 2.9171245899, 106.73292588839],
    [0.0000128962, 3.397088611, 46.4536079686],
    [0.00001559811, 0.55870841967, 38.11622069041],
    [0.00001545705, 0.64028776037, 38.6374855522],
    [0.00001435033, 0.72855949679, 522.8212355773],
    [0.00001406206, 3.61717027558, 537.0483295789],
    [0.00001256446, 2.70907758736, 34.1840674273],
    [0.00001387973, 3.71843398082, 116.12739710521],
    [0.00001457739, 1.98981635014, 181.5145244557],
    [0.00001228429, 2.78646343835, 72.31710306511],
    [0.00001140665, 3.96643713353, 7.83293736379],
    [0.00001080801, 4.75483465055, 42.5696388153],
    [0.00001201409, 0.74547986507, 2.7251279331],
    [0.00001228671, 2.65249731727, 148.32254190981],
    [0.00000722014, 6.16806714444, 152.77596003471],
    [0.00000608545, 4.49536985567, 35.4560918145],
    [0.00000722865, 3.09340262825, 143.38148881789],
    [0.0000063282, 3.41702130042, 7.66618102501],
    [0.00000642369, 3.97490787694, 68.5998902506],
    [0.00000553789, 2.98606728111, 41.2976144281],
    [0.00000682276, 2.15806346682, 218.1630873852],
    [0.00000463186, 2.74420554348, 31.7845709823],
    [0.0000052156, 0.34813640632, 0.719390363],
    [0.00000437892, 1.29807722623, 1589.3167127673],
    [0.00000398091, 5.5078369151, 6.3484646555],
    [0.00000384065, 4.72632236146, 44.96913526031],
    [0.00000395583, 5.0552767739, 108.70503356371],
    [0.00000327446, 2.69199709491, 60.52313540329],
    [0.00000358824, 4.99912098256, 30.4668546128],
    [0.00000315179, 0.17468500209, 74.53778108379],
    [0.00000343384, 1.74645896957, 0.7650823453],
    [0.00000399611, 5.33540800911, 31.2633061205],
    [0.00000314611, 2.98803024638, 419.72846135871],
    [0.00000347596, 3.26643963659, 180.03005174739],
    [0.00000382279, 0.21764578681, 487.1213262793],
    [0.00000300918, 4.04922612099, 69.0875252176],
    [0.00000340448, 3.90546849629, 146.8380692015],
    [0.0000029871, 5.18013539651, 84.5866436064],
    [0.00000290629, 1.74873675275, 110.45013870291],
    [0.00000336211, 2.14815098729, 45.49040012211],
    [0.00000305606, 5.63265481978, 640.1411037975],
    [0.00000333702, 2.32938316969, 254.8116503147],
    [0.0000026806, 3.30852201658, 37.0042549976],
    [0.0000026476, 4.12724058864, 39.749451245],
    [0.0000031524, 2.72241788492, 388.70897272171],
    [0.00000227098, 4.59157281152, 273.8222308413],
    [0.00000306112, 1.75345186469, 6283.3196674749],
    [0.00000284373, 3.36139825385, 12.77399045571],
    [0.00000221105, 3.50940363876, 213.0552779545],
    [0.00000242568, 2.0643765001, 14.258463164],
    [0.00000241087, 4.16115355874, 105.2484531801],
    [0.00000226136, 2.83815938853, 80.963306884],
    [0.00000245904, 0.54462524204, 27.3311528574],
    [0.00000265825, 4.10952660358, 944.7390057923],
    [0.00000207893, 5.07812851336, 30.95448957981],
    [0.00000214661, 2.65402494691, 316.6356871401],
    [0.00000190638, 2.32667703756, 69.3963417583],
    [0.00000246295, 1.98638488517, 102.84895673509],
    [0.00000202915, 0.60029260077, 415.04804069769],
    [0.00000176465, 0.14731292877, 36.7805058284],
    [0.00000193886, 3.35476299352, 174.9222423167],
    [0.00000175209, 1.12575693515, 39.97320041421],
    [0.00000177868, 3.43923391414, 216.67861467689],
    [0.00000138494, 5.45265920432, 75.98862389731],
    [0.00000152234, 4.81662104772, 11.2895177474],
    [0.00000147648, 1.68543706672, 151.2914873264],
    [0.00000156202, 3.65252575052, 146.3504342345],
    [0.00000152289, 0.07345728764, 23.87457247379],
    [0.00000177911, 3.17643554721, 10213.5293636945],
    [0.00000162474, 4.13351391379, 63.9797157869],
    [0.00000121226, 5.10584286197, 38.16440480021],
    [0.00000129049, 3.80684906955, 37.1048287341],
    [0.00000120334, 2.37637214462, 38.5893014424],
    [0.00000168977, 2.49551838497, 291.4602132442],
    [0.00000121138, 1.49657109299, 33.26904369061],
    [0.00000129366, 2.36903010922, 45.7992166628],
    [0.00000144682, 0.63023431786, 49.42255338521],
    [0.00000122915, 3.67433526761, 39.6488775085],
    [0.000001134, 0.42160185021, 83.1021708981],
    [0.00000154892, 1.74989069653, 77.4730966056],
    [0.00000106737, 0.57437068095, 4.8639919472],
    [0.00000104756, 5.96272070512, 43.484662552],
    [0.00000125142, 5.82780261996, 4.2096006414],
    [0.00000103541, 5.25634741505, 41.08516610701],
    [0.00000133573, 3.92147215781, 182.998997164],
    [0.00000103627, 2.29256111601, 35.6685401356],
    [0.00000116874, 5.41378396536, 62.4952430786],
    [0.00000098063, 3.25654027665, 9.8050450391],
    [0.00000111411, 4.34345309647, 141.8970161096],
    [0.00000114294, 5.56228935636, 633.0275567967],
    [0.00000104705, 6.26072139356, 433.9555553603],
    [0.00000121306, 1.44892345337, 40.8581635709],
    [0.00000096954, 6.17373469303, 1052.51220067191],
    [0.00000085104, 4.7901822236, 36.6799320919],
    [0.00000085209, 5.94497188324, 105.76971804189],
    [0.00000085291, 2.59495207397, 109.701871305],
    [0.0000008326, 0.00625676877, 529.44714761109],
    [0.000000802, 2.69199769694, 40.07377415071],
    [0.00000107927, 0.01570870082, 1162.7185218913],
    [0.00000095241, 3.61102256601, 253.32717760639],
    [0.00000089535, 3.25178384851, 32.9602271499],
    [0.00000089793, 2.76430560225, 65.46418849521],
    [0.00000072027, 0.11366576076, 36.9405645228],
    [0.00000080381, 5.21057317852, 67.1154175423],
    [0.00000099502, 2.53010647936, 453.1810763355],
    [0.00000088685, 1.33848394125, 251.6759485593],
    [0.00000094971, 4.11602347578, 219.6475600935],
    [0.00000077015, 5.30660266172, 5.6604434549],
    [0.00000069098, 1.84984192453, 22.3900997655],
    [0.00000079079, 4.12824954018, 44.48150029329],
    [0.00000069159, 3.95901333551, 1066.7392946735],
    [0.00000064446, 4.03076164648, 66.9486612035],
    [0.00000088518, 2.66179796694, 328.1087761737],
    [0.00000065817, 1.42821476263, 36.3711155512],
    [0.00000071422, 4.23104971231, 43.79347909271],
    [0.00000063298, 2.21146718451, 9.1506537333],
    [0.0000007732, 0.26842720811, 97.17169833279],
    [0.00000073912, 1.7239763843, 2.6769438233],
    [0.00000073965, 5.55809543248, 2.9521304692],
    [0.00000056194, 4.45857439361, 949.4194264533],
    [0.00000059173, 1.41372632607, 100.14064374939],
    [0.00000067507, 3.94700376513, 7.14491616321],
    [0.00000071718, 0.93392607299, 2.20386307129],
    [0.00000063606, 5.17175542607, 25.8466801491],
    [0.00000071523, 2.05830478088, 662.28738607949],
    [0.00000057219, 0.88485013288, 15.7429358723],
    [0.00000050322, 1.08310288762, 37.15301284391],
    [0.00000066615, 3.4246226466, 846.3266522347],
    [0.0000005622, 4.52386924168, 178.5455790391],
    [0.00000067883, 3.88546727303, 224.5886131854],
    [0.00000057761, 5.16493680948, 145.35359649321],
    [0.00000053973, 6.25404762289, 107.2205608554],
    [0.00000057588, 4.84839311245, 25.3590451821],
    [0.00000049026, 1.27836371915, 19.2543980101],
    [0.00000063036, 4.29760573349, 256.296123023],
    [0.00000045304, 0.86492921312, 4.1759707466],
    [0.00000045669, 2.17547535945, 117.6118698135],
    [0.00000052821, 3.77933473571, 289.97574053589],
    [0.00000044016, 2.25498623278, 32.7477788288],
    [0.00000042933, 6.21504221321, 28.98238190449],
    [0.00000038369, 0.36602717013, 39.6006933987],
    [0.00000038805, 4.12403932769, 103.3365917021],
    [0.00000037679, 3.40097359574, 9.3174100721],
    [0.00000040292, 6.03933270535, 111.18634401329],
    [0.00000050011, 6.19966711969, 221.61966776881],
    [0.00000037056, 4.63008749202, 8.32057233081],
    [0.00000036562, 0.18548635975, 448.98829064149],
    [0.00000044628, 3.82762130859, 525.2543619171],
    [0.00000038213, 0.28030378709, 75.54668091261],
    [0.00000045963, 4.06403723861, 183.486632131],
    [0.00000048222, 2.81328685847, 364.7573391032],
    [0.00000038164, 5.23367149002, 44.00592741381],
    [0.00000047779, 6.1927275075, 3340.8562441833],
    [0.00000042228, 5.64690940917, 77.0311536209],
    [0.00000035247, 0.20766845689, 34.7535163989],
    [0.00000046804, 3.96902162832, 33.6964324603],
    [0.00000034352, 1.08289070011, 33.71098667531],
    [0.00000034949, 2.01384094499, 3.37951923889],
    [0.0000003603, 2.17275904548, 71.09326278771],
    [0.00000038112, 5.65470955047, 45.9659730016],
    [0.00000033119, 5.27794057043, 7.3573644843],
    [0.00000032049, 4.61840704188, 34.44469985821],
    [0.0000003191, 1.77890975693, 81.61769818981],
    [0.00000038697, 2.66910057126, 184.97110483931],
    [0.00000041486, 2.58550378076, 310.4707937708],
    [0.00000038631, 2.31715796823, 50.9070260935],
    [0.00000042711, 2.19232104972, 1021.49271203491],
    [0.00000032006, 0.97590559431, 42.00018984371],
    [0.00000038436, 0.31352578874, 5.92107588581],
    [0.0000003888, 3.29381198979, 76.55807286891],
    [0.0000004119, 4.58002024645, 563.87503252191],
    [0.00000029786, 1.00565266044, 77.5067265004],
    [0.00000040604, 4.47511985144, 292.9446859525],
    [0.00000035275, 1.67517293934, 304.84171947829],
    [0.00000038242, 2.800913493, 17.76992530181],
    [0.00000034445, 4.48124108827, 319.06881347989],
    [0.00000028725, 5.51593817617, 67.6366824041],
    [0.00000032809, 5.57900930431, 91.54262404029],
    [0.0000003888, 0.56654650956, 76.4617046493],
    [0.00000030731, 5.22467991145, 67.60305250931],
    [0.00000028459, 0.11298908847, 43.0427195673],
    [0.00000035368, 3.56936550095, 313.43973918739],
    [0.00000035703, 0.06787236157, 258.26823069831],
    [0.00000032317, 2.30071476395, 78.9575693139],
    [0.00000029243, 0.30724049567, 61.01077037031],
    [0.00000026235, 3.88058959053, 137.2768416459],
    [0.00000026519, 6.20266742881, 57.4993082325],
    [0.00000024931, 5.73688334159, 42.997027585],
    [0.00000027608, 5.3968193537, 103.7639804718],
    [0.0000002868, 4.65490114562, 215.1941419686],
    [0.00000025052, 5.70195779765, 350.08830211689],
    [0.00000031386, 4.10756442698, 22.22334342671],
    [0.00000027545, 1.30787829275, 100.6282787164],
    [0.00000022617, 3.46251776435, 36.8441963032],
    [0.00000024909, 0.20851017271, 24.36220744081],
    [0.00000026216, 4.94808817995, 491.8017469403],
    [0.0000002804, 2.83295165264, 11.55015017831],
    [0.00000023047, 4.24570423583, 35.51978228931],
    [0.00000027067, 3.95547247738, 326.62430346539],
    [0.00000026192, 2.35959813381, 20.7388707184],
    [0.00000023134, 2.59485537406, 68.4331339118],
    [0.00000021423, 0.87822750255, 39.90950993941],
    [0.00000025696, 0.32414101638, 186.4555775476],
    [0.00000026985, 3.53264939991, 69.6087900794],
    [0.00000023284, 2.71588030137, 79.43065006591],
    [0.00000022894, 0.61847067768, 227.77000692311],
    [0.00000022482, 0.7234959689, 39.8131417198],
    [0.0000002348, 4.39643703557, 30.9881194746],
    [0.00000020858, 3.23577429095, 41.2339239533],
    [0.00000020327, 1.15567976096, 39.0312444271],
    [0.00000020327, 0.04331485179, 37.72246181551],
    [0.00000022639, 0.21515321589, 0.9800227939],
    [0.00000022639, 0.21515321589, 1.46765776091],
    [0.00000019139, 0.03506366059, 205.9417309537],
    [0.00000019118, 1.62564867989, 2119.00767786191],
    [0.00000025698, 2.97643019475, 401.4059020327],
    [0.00000021582, 4.29532713983, 81.13006322279],
    [0.00000025509, 4.6482955911, 329.593248882],
    [0.00000024296, 2.11682013072, 62.0076081116],
    [0.00000023969, 0.88887585882, 135.3047339706],
    [0.00000020599, 4.51946091131, 491.3141119733],
    [0.00000016829, 5.63589438225, 3.1645787903],
    [0.0000002003, 4.02146628228, 217.4750661846],
    [0.00000020377, 0.89378346451, 209.6107596584],
    [0.00000017251, 2.57319624936, 350.5759370839],
    [0.00000019625, 6.12382765898, 129.6756596781],
    [0.00000022707, 5.6910608981, 1436.2969352491],
    [0.00000017142, 0.0050193257, 29.4700168715],
    [0.00000016188, 4.90861200887, 39.00999256771],
    [0.00000016188, 2.57356791106, 37.7437136749],
    [0.00000020858, 4.67505024087, 58.9837809408],
    [0.00000015747, 1.88900821622, 154.260432743],
    [0.00000019714, 0.33238117487, 294.91679362781],
    [0.00000019078, 2.737549133, 202.4972126576],
    [0.0000002153, 3.3799624968, 114.1552894299],
    [0.00000019068, 1.82733694293, 138.2736793872],
    [0.00000018723, 6.21404671018, 323.74923414091],
    [0.00000018916, 5.47002080885, 40.3825906914],
    [0.00000015843, 0.2766039348, 72.577735496],
    [0.00000020695, 5.32080415125, 86.07111631471],
    [0.00000015895, 5.73200518668, 736.1203310153],
    [0.00000014983, 2.13549071268, 743.23387801611],
    [0.00000014928, 0.78464963633, 34.23225153711],
    [0.00000015461, 6.04598420333, 20.850745303],
    [0.00000016206, 6.05974800797, 138.76131435421],
    [0.00000015978, 0.85734083354, 515.70768857651],
    [0.00000014173, 2.99587831656, 99.1438060081],
    [0.00000018749, 3.37545937432, 54.5303628159],
    [0.00000013971, 5.11256155147, 76.77052119001],
    [0.00000013971, 5.03098185419, 76.2492563282],
    [0.00000014035, 4.45768361334, 235.68919520349],
    [0.00000018894, 4.59865824553, 31.4757544416],
    [0.00000014967, 0.97104009185, 52.3914988018],
    [0.00000017392, 1.69348450373, 74.0622082043],
    [0.00000014788, 5.00944229014, 56.01483552421],
    [0.00000015758, 5.9742379544, 208.8624922605],
    [0.00000012911, 0.41434497695, 42.5214547055],
    [0.00000014356, 4.8977806671, 251.8427048981],
    [0.00000016266, 4.96350311575, 853.4401992355],
    [0.00000015513, 1.02523907534, 59.038662695],
    [0.00000012783, 2.34267333656, 107.52937739611],
    [0.00000016075, 4.73335524561, 366.24181181149],
    [0.00000014277, 4.88488299527, 19.36627259471],
    [0.00000014742, 1.55115458505, 82.4477795923],
    [0.00000015111, 4.13629021798, 363.27286639489],
    [0.00000014981, 5.88358063018, 82.6145359311],
    [0.0000001484, 0.6283629911, 44.0541115236],
    [0.00000015592, 1.03195525294, 8.6293888715],
    [0.00000014568, 2.02105422692, 73.80157577341],
    [0.00000012251, 1.18824225128, 47.28368937111],
    [0.00000011447, 0.91374266731, 175.40987728371],
    [0.000000139, 5.64591952885, 700.4204217173],
    [0.00000015583, 3.88966860773, 837.4534458797],
    [0.00000012109, 2.10142517621, 33.0084112597],
    [0.00000012379, 5.59016916358, 140.4125434013],
    [0.00000011481, 5.22670638349, 39.2069345238],
    [0.00000011481, 2.25547353643, 37.54677171881],
    [0.00000011452, 1.21111994028, 529.4135177163],
    [0.00000010981, 0.01852111423, 63.49208081989],
    [0.00000012137, 2.33017731448, 42.3090063844],
    [0.00000013771, 4.49397894473, 76.62176334371],
    [0.00000011036, 3.16457889057, 530.45604743991],
    [0.00000011537, 4.29449656032, 199.3158189199],
    [0.00000011189, 3.24467764115, 80.1332254815],
    [0.00000012835, 1.26831311464, 38.85242600079],
    [0.00000012879, 4.74400685998, 5.69407334969],
    [0.00000013663, 3.12818073078, 438.0544649622],
    [0.00000010132, 4.37559264666, 187.9400502559],
    [0.00000012619, 4.66177013386, 65.2035560643],
    [0.00000010088, 6.12382762451, 26.58288545949],
    [0.00000011959, 5.90953104234, 64.7159210973],
    [0.00000011578, 4.24710384177, 275.3067035496],
    [0.00000012795, 3.23836197733, 17.8817998864],
    [0.00000013771, 5.64956481971, 76.3980141745],
    [0.00000010044, 0.10145082472, 147.83490694279],
    [0.00000013632, 2.86683446064, 45.277951801],
    [0.0000001166, 2.6580123904, 143.9027536797],
    [0.00000009938, 4.2197047632, 6.86972951729],
    [0.00000009719, 6.05786462616, 956.53297345411],
    [0.00000011441, 0.61314587598, 533.8669358412],
    [0.0000001024, 2.91846731922, 80.7026744531],
    [0.00000010031, 5.38075474506, 43.74529498291],
    [0.00000010063, 5.77064020369, 0.27744737829],
    [0.00000011428, 3.7701314566, 526.00262931501],
    [0.00000009279, 6.16721103485, 79.6455905145],
    [0.00000010172, 2.46540726742, 568.0678182159],
    [0.00000009198, 5.07759437389, 112.6708167216],
    [0.00000009831, 2.49002547943, 20.9056270572],
    [0.0000000983, 3.51040521049, 544.1618765797],
    [0.00000008646, 4.49185896918, 30.7756711535],
    [0.00000009315, 0.15689765715, 65.63094483399],
    [0.00000009201, 0.09219461091, 184.48346987229],
    [0.00000008674, 2.0117072035, 624.1543504417],
    [0.00000010739, 0.49719235939, 331.56535655731],
    [0.00000009612, 5.38629260665, 182.00215942271],
    [0.00000008664, 5.62437013922, 1479.11039154791],
    [0.00000008092, 5.65922856578, 6.8360996225],
    [0.00000010092, 4.71596617075, 419.2408263917],
    [0.00000010233, 4.88231209018, 402.89037474099],
    [0.00000008502, 2.03567120581, 17.39416491939],
    [0.00000010189, 2.58985636739, 21.7020785649],
    [0.00000009829, 5.23644081358, 121.2352065359],
    [0.00000008406, 2.4719101835, 376.9150050599],
    [0.0000000806, 5.62304271115, 415.7963080956],
    [0.00000009455, 0.06796991442, 167.80869531589],
    [0.00000007941, 1.43287391293, 526.7533888404],
    [0.0000000787, 2.90339733997, 533.1161763158],
    [0.00000007695, 0.92731028198, 906.60597015449],
    [0.00000007862, 0.91484097138, 1265.81129610991],
    [0.00000008062, 1.12885573257, 105.7360881471],
    [0.00000008904, 4.30824949636, 399.9214293244],
    [0.0000000805, 0.14722556593, 143.8691237849],
    [0.00000009102, 4.77518241515, 348.17644063891],
    [0.00000007137, 1.26110622464, 117.5636857037],
    [0.00000007076, 3.19957487812, 26.84351789039],
    [0.00000008418, 1.48515415206, 77.73372903651],
    [0.00000008257, 4.44435970504, 117.77862615229],
    [0.00000007868, 5.07706724776, 288.4912678276],
    [0.00000008093, 0.41458983168, 1692.40948698591],
    [0.0000000691, 0.44789832682, 216.72430665921],
    [0.00000007092, 0.01337002281, 452.65981147369],
    [0.0000000706, 1.93108090539, 453.7023411973],
    [0.00000008233, 3.50880140177, 480.00777927849],
    [0.00000006772, 4.46250089888, 210.36151918381],
    [0.00000007025, 1.42668370417, 55.9029609396],
    [0.00000008356, 2.10000097648, 95.7354097343],
    [0.00000007404, 1.00293545057, 75.2860484817],
    [0.00000006839, 0.99943444853, 41.5125548767],
    [0.00000007909, 1.64368221183, 36.63174798211],
    [0.00000007909, 2.69690505451, 40.12195826051],
    [0.00000006362, 0.26347531595, 29.99128173331],
    [0.00000006712, 0.84138813413, 133.82026126229],
    [0.00000007571, 2.81738238064, 23.707816135],
    [0.00000006677, 0.10164158344, 1.20702533],
    [0.000000076, 0.07294781428, 494.2348732801],
    [0.00000008009, 0.3908630819, 170.72945662269],
    [0.00000007584, 6.04989436828, 119.2630988606],
    [0.00000006599, 2.25520576507, 32.226513967],
    [0.00000006085, 4.97064703625, 322.00412900171],
    [0.00000005953, 2.49854544351, 52214.1831362697],
    [0.00000007827, 3.28593277837, 474.7030278917],
    [0.00000007907, 4.46293464979, 485.63685357099],
    [0.00000007372, 4.88712847504, 55.05162767771],
    [0.00000006966, 5.60552242454, 647.25465079831],
    [0.00000006266, 5.78133779594, 177.0611063308],
    [0.000000059, 4.92602771915, 52061.16335875149],
    [0.00000006221, 2.35523958706, 602.00806815971],
    [0.00000005552, 5.87735995607, 223.1041404771],
    [0.00000005976, 1.83099110545, 10.8018827804],
    [0.000000076, 5.33804556108, 488.6057989876],
    [0.00000006831, 0.04615498459, 1582.2031657665],
    [0.00000005654, 3.04032114806, 12604.5285531041],
    [0.00000005798, 1.13675043219, 27.4979091962],
    [0.00000007216, 0.18192294134, 739.0410923221],
    [0.00000006579, 3.94809746775, 2.69149803831],
    [0.00000005758, 2.82344188087, 30.0394658431],
    [0.0000000527, 3.46743079634, 6166.94845288619],
    [0.00000007398, 0.58333334375, 709.721016842],
    [0.00000005679, 5.91776083103, 17.22740858061],
    [0.00000005205, 2.61017638124, 426.3543733925],
    [0.00000005146, 0.81172664742, 46.7624245093],
    [0.00000005694, 2.94913098744, 168.98435148349],
    [0.00000006627, 6.07668723879, 221.13203280179],
    [0.00000005443, 4.34867602386, 525.7419968841],
    [0.00000006475, 2.52364293984, 591.07424248041],
    [0.00000004984, 4.89088409053, 10097.15814910579],
    [0.00000005318, 5.22697316848, 44.52719227561],
    [0.00000006699, 2.95047965393, 2157.1407134997],
    [0.00000006443, 5.6506815693, 675.0445615878],
    [0.00000005078, 0.96513123174, 101.62511645769],
    [0.00000005394, 0.88948762211, 368.21391948681],
    [0.00000005072, 2.5259753061, 272.33775813299],
    [0.00000005208, 4.53150187093, 277.2788112249],
    [0.00000005332, 1.28621962216, 280.9357778421],
    [0.00000005989, 5.8927141105, 93.0270967486],
    [0.00000006329, 0.49570607842, 18.87863762769],
    [0.00000005551, 2.57045763275, 57.3874336479],
    [0.00000006471, 0.0446353554, 68.1243173711],
    [0.00000004708, 2.23921095477, 95.68722562449],
    [0.00000005891, 5.96441381591, 381.5954257209],
    [0.00000004717, 4.31682479516, 104.2852453336],
    [0.00000005675, 1.71229301179, 1165.6392831981],
    [0.00000005888, 0.43219504278, 42.34263627919],
    [0.00000005587, 4.09170092519, 459.6066021357],
    [0.00000005456, 1.50864831442, 75.50098893029],
    [0.0000000594, 6.28075673596, 6318.4837576961],
    [0.00000005207, 4.5513406928, 436.5699922539],
    [0.0000000616, 4.7604644821, 749.82616015511],
    [0.00000006137, 4.59348226478, 713.17759722561],
    [0.00000004547, 2.39218547281, 32.47259218289],
    [0.00000005246, 4.97888240032, 109.9625037359],
    [0.00000005244, 2.33674770879, 73.5891274523],
    [0.00000005572, 6.1203802819, 102.11275142471],
    [0.00000005638, 1.42053892188, 10248.6934539157],
    [0.00000004513, 1.62848698862, 1272.9248431107],
    [0.0000000434, 2.3644986681, 384.02855206069],
    [0.00000004263, 4.24631269159, 1577.52274510549],
    [0.00000005964, 4.92643136579, 786.47472308461],
    [0.00000004962, 6.09839378254, 257.78059573129],
    [0.00000005327, 5.70215230442, 107.74182571721],
    [0.00000005572, 0.87438107795, 291.2934569054],
    [0.00000004336, 5.80113193852, 53.40958840249],
    [0.00000004427, 3.00157250839, 189.42452296421],
    [0.00000004157, 3.46647899628, 29.5036467663],
    [0.00000004646, 2.87774169214, 13285.93981804009],
    [0.00000005507, 4.27464738844, 178.11819026941],
    [0.00000005348, 1.42468292991, 24.88347230261],
    [0.00000005339, 3.91840662285, 314.6635794648],
    [0.00000004678, 4.43608792406, 1474.4299708869],
    [0.0000000409, 3.35633664186, 765.3801602981],
    [0.00000005008, 5.85701520659, 352.06040979221],
    [0.00000005562, 0.40887335705, 6248.1555772537],
    [0.00000004983, 3.16236150253, 1055.43296197871],
    [0.00000004566, 5.25700629292, 325.1398307571],
    [0.00000005327, 5.25347269162, 439.53893767049],
    [0.00000005121, 5.84825704577, 711.6931245173],
    [0.00000004181, 1.11749590962, 6606.1994373488],
    [0.00000004293, 4.65873798886, 46.71424039951],
    [0.00000005532, 0.53479774781, 320.03202132639],
    [0.00000004492, 0.09912827297, 52177.53457334019],
    [0.00000004312, 1.38883413817, 22.8777347325],
    [0.00000005332, 1.83070192574, 10178.3652734733],
    [0.00000004593, 0.14820750962, 1025.6854977289],
    [0.00000005439, 5.09447580219, 823.12328601411],
    [0.0000000387, 4.27995377915, 1596.43025976811],
    [0.00000003892, 2.11564791977, 226.07308589371],
    [0.00000004891, 2.80814026706, 8.1417539045],
    [0.00000004689, 3.52062924653, 276.79117625789],
    [0.00000004268, 2.59269427473, 374.15181032],
    [0.00000003828, 2.28076604659, 2138.2331988371],
    [0.00000004592, 3.87527577295, 1376.0176173293],
    [0.00000004629, 0.97709160917, 122.71967924421],
    [0.00000003871, 3.17548325596, 531.4192552864],
    [0.00000004995, 0.32063762943, 32.69959471901],
    [0.00000004711, 0.43748317622, 52252.31617190749],
    [0.00000003893, 0.1247533411, 116.294153444],
    [0.00000004481, 4.6647984182, 53.0458901076],
    [0.00000004136, 2.59386926777, 503.1080796351],
    [0.00000004508, 4.38574998818, 562.12992738271],
    [0.00000005025, 0.39865233659, 283.38345839689],
    [0.00000004789, 2.68692249791, 627.7228054099],
    [0.00000004021, 0.14454426922, 6603.23049193219],
    [0.00000005163, 4.7746067662, 25519.83532335829],
    [0.0000000415, 3.86319541901, 27.443027442],
    [0.00000003623, 2.29457319711, 1665.5827840429],
    [0.00000004634, 1.79141170909, 3227.45397501119],
    [0.0000000406, 6.21658618282, 304.4780211834],
    [0.00000003862, 0.50812728673, 74.504151189],
    [0.00000003561, 4.9297122476, 358.6526919312],
    [0.00000004557, 6.27521064672, 25974.74468988559],
    [0.00000004264, 1.56884112199, 634.93941827469],
    [0.00000004482, 1.70550805319, 342.61105682121],
    [0.00000003539, 0.56907944763, 119.7507338276],
    [0.00000004304, 0.63784646457, 12567.8799901746],
    [0.00000004138, 4.03567139847, 107.2541907502],
    [0.00000004284, 0.05420881503, 294.42915866079],
    [0.00000003723, 5.58644401851, 987.325459555],
    [0.00000003723, 5.58644401851, 987.813094522],
    [0.00000004606, 5.49553530451, 14.42521950279],
    [0.00000004236, 6.22240593144, 155.9116617901],
    [0.00000004458, 2.64590572483, 395.8225197225],
    [0.00000004798, 5.23929868658, 530.195415009],
    [0.0000000364, 2.22734915897, 2564.8313897131],
    [0.00000003563, 5.37459598926, 12451.50877558589],
    [0.00000003443, 2.13809774331, 245.2504227591],
    [0.00000003429, 4.73423412994, 530.0466571627],
    [0.00000003872, 4.09217464449, 308.98632106249],
    [0.00000003406, 5.88979864779, 529.82290799351],
    [0.00000004348, 1.52419659995, 20311.92816802509],
    [0.00000004589, 5.24153025487, 181.08713568601],
    [0.00000003854, 5.92510183178, 12564.91104475801],
    [0.00000003789, 4.29351893525, 3101.6359018085],
    [0.00000003783, 0.26936683978, 1614.17130803499],
    [0.00000003904, 0.00421090422, 369.8014580591],
    [0.00000003765, 4.70889835066, 1025.94613015981],
    [0.00000004231, 5.35914297519, 31.52393855141],
    [0.00000004303, 4.97345150272, 396.785727569],
    [0.00000004085, 1.80921070558, 14.47091148511],
    [0.00000004085, 1.80921070558, 13.9832765181],
    [0.00000003346, 4.91522066963, 20351.54567637119],
    [0.00000004021, 6.08537487228, 748.3416874468],
    [0.00000003753, 1.17204243376, 524.99372948619],
    [0.00000003935, 1.24122122244, 1617.14025345159],
    [0.00000004432, 3.45778366813, 511.3515908212],
    [0.0000000417, 4.42864444413, 274.87931477991],
    [0.00000003317, 1.7934755488, 266.70868384049],
    [0.00000004545, 4.56531161641, 244.5624015585],
    [0.00000003589, 1.5538488043, 59.526297662],
    [0.00000003464, 0.37736158688, 102.27950776349],
    [0.00000004526, 4.55402483522, 525.7901809939],
    [0.00000004603, 4.4026076549, 26088.1469590577],
    [0.00000004021, 5.3858185385, 52174.56562792359],
    [0.00000003276, 1.95663025139, 1306.3774580875],
    [0.00000003214, 3.94235488355, 20348.57673095459],
    [0.00000003706, 5.25360971143, 27.07052042651],
    [0.00000003759, 4.3224516672, 164.83974989929],
    [0.00000003184, 2.01654309849, 538.0115374254],
    [0.0000000443, 5.37917502758, 529.6741501472],
    [0.00000004064, 1.03322736236, 6130.2998899567],
    [0.00000003918, 4.20575585414, 375.43053235159],
    [0.00000004058, 5.13313296042, 433.4342904985],
    [0.00000003919, 0.36694469487, 1092.8177302186],
    [0.00000003919, 0.36694469487, 1093.3053651856],
    [0.00000003175, 1.14568678321, 241.3664536058],
    [0.00000003135, 5.81037649777, 127.22797912329],
    [0.00000003834, 1.84941829775, 14.3133449182],
    [0.00000004022, 1.72079825603, 1477.8383671607],
    [0.00000003221, 1.09261076661, 78.1611178062],
    [0.00000003426, 0.06166201047, 519.8522901607],
    [0.00000004369, 0.74973637733, 746.3695797715],
    [0.0000000316, 2.01821245093, 664.99569906519],
    [0.0000000406, 6.0608771653, 51.87023394],
    [0.00000003107, 5.38240469077, 28.9275001503],
    [0.00000003259, 5.62260974194, 657.8821520644],
    [0.00000003428, 1.24133782529, 2351.5322942751],
    [0.00000003235, 1.6469247266, 406.3469551246],
    [0.00000003161, 5.69758725685, 982.8720414301],
    [0.00000004351, 1.04662835997, 20388.19423930069],
    [0.00000003384, 0.30649784029, 660.851097481],
    [0.00000003452, 4.39659352485, 326.1823604807],
    [0.00000003298, 0.15489069807, 1403.84115801359],
    [0.00000003278, 3.68945780931, 941.7700603757],
    [0.00000003723, 5.00962048402, 451.9572360581],
    [0.00000003173, 5.46640783518, 1400.87221259699],
    [0.00000004113, 1.87439213951, 1049.31625271919],
    [0.00000004012, 2.15082049909, 52.6039471229],
    [0.00000004142, 4.897827899, 978.6792557361],
    [0.00000004295, 1.37302733197, 875.58648151749],
    [0.00000003224, 3.81995287471, 459.1189671687],
    [0.00000003151, 3.69005421605, 381.8560581518],
    [0.00000003633, 1.38559724652, 256.78375799],
    [0.0000000425, 0.10595516218, 528.71094230071],
    [0.00000004186, 2.09187651842, 943.25453308399],
    [0.00000003406, 0.2512686675, 170.46882419179],
    [0.00000003231, 4.61367643853, 400.8209466961],
    [0.00000003726, 0.55318715397, 1096.48675892331],
    [0.00000003792, 0.75464081409, 111.9346114112],
    [0.00000003651, 4.5693334162, 154.42718908179],
    [0.00000003839, 2.45649426115, 10060.50958617629],
    [0.00000003356, 0.62546125542, 1586.34776735071],
    [0.00000003219, 5.97786590701, 213.7096692603],
    [0.00000003671, 1.51743688101, 57.6023740965],
    [0.00000004187, 0.29242250575, 2772.54460848389],
    [0.0000000296, 2.20142019667, 2461.7386154945],
    [0.00000003331, 0.81281655951, 10133.80671203529],
    [0.00000003341, 1.17831577639, 243.7659500508],
    [0.00000003466, 4.73891819304, 1150.92455422949],
    [0.00000003296, 3.49817757911, 1653.78881638109],
    [0.00000003014, 1.9009221667, 1477.3989163035],
    [0.00000004118, 2.83150543771, 25596.5890296009],
    [0.00000002951, 5.04298380276, 42.78208713641],
    [0.00000002951, 5.58078877076, 33.9716191062],
    [0.0000000383, 4.59720174528, 323.48860171],
    [0.00000003313, 1.648400546, 939.1099314998],
    [0.00000003031, 2.75126158832, 156450.9089606861],
    [0.00000003606, 3.92819651217, 1082.2596649217],
    [0.00000002967, 0.01380556143, 6.3941566378],
    [0.00000002995, 3.55729257964, 139.7099679857],
    [0.00000003251, 3.50186784018, 709.29362807231],
    [0.0000000348, 0.6171647312, 518.1408149163],
    [0.00000003906, 2.84871380483, 1119.90506559249],
    [0.00000003406, 1.85522558472, 148.79811478929],
    [0.00000003359, 1.74239209634, 642.8494167832],
    [0.00000003027, 0.29741383095, 184.0078969928],
    [0.00000002918, 2.25866029656, 83.6234357599],
    [0.00000003347, 6.10666820526, 217.68751450571],
    [0.00000003277, 0.27333269638, 912.5438609877],
    [0.00000003277, 0.27333269638, 913.03149595471],
    [0.00000003196, 5.84286985933, 363.1061100561],
    [0.00000002869, 4.503344366, 285.35556607221],
    [0.00000003158, 1.18152957041, 540.01727499551],
    [0.0000000281, 5.14802919795, 1592.2856581839],
    [0.00000003471, 6.13160952457, 144.39038864671],
    [0.00000003159, 4.14451339136, 197.5561595657],
    [0.00000003227, 5.73841253304, 6203.5970158157],
    [0.0000000375, 5.81139240481, 303.35724676999],
    [0.00000003848, 3.38110828764, 26048.04181574459],
    [0.00000002741, 1.70084306406, 70.8326303568],
    [0.00000002826, 2.07742210458, 460.2946233363],
    [0.00000002748, 0.98378370701, 600.52359545141],
    [0.00000003057, 6.13629771077, 23.81969071961],
    [0.00000003057, 1.34588220916, 52.934015523],
    [0.00000003446, 3.5404664615, 500.1391342185],
    [0.00000002703, 4.6919263318, 908.0904428628],
    [0.00000002817, 3.26718539283, 210.6221516147],
    [0.00000002848, 5.88127781412, 450.4727633498],
    [0.00000002724, 0.93671586048, 23.18655127321],
    [0.00000002905, 5.8503952789, 149.3193796511],
    [0.00000002848, 6.2008114393, 622.66987773339],
    [0.00000002733, 3.50715759295, 262.72164882321],
    [0.00000002863, 0.69834580836, 175.57663362249],
    [0.00000002681, 1.11809511751, 25.1922888433],
    [0.00000002822, 1.57963221264, 259.7527034066],
    [0.00000003174, 6.18541771069, 347.1193567003],
    [0.00000003271, 1.40248413653, 458.5977023069],
    [0.00000002894, 4.18128306427, 71.82946809809],
    [0.0000000349, 2.85083291634, 664.3713683394],
    [0.00000003506, 5.48691285949, 771.3481117113],
    [0.00000003326, 2.12303698267, 45.2297676912],
    [0.00000002988, 0.23324807191, 299.37021175271],
    [0.00000002916, 3.60780287924, 6642.8480002783],
    [0.00000002916, 0.46621022565, 6643.3356352453],
    [0.0000000263, 1.12694509764, 2751.79141717511],
    [0.00000002903, 4.31055308658, 477.08701797169],
    [0.00000002804, 0.2645659302, 6681.46867088311],
    [0.00000002622, 2.30179163581, 521.8580277308],
    [0.00000002606, 6.15707729666, 410.8552550037],
    [0.00000003046, 2.36386768037, 959.45373476091],
    [0.00000003127, 3.04512463308, 225.5518210319],
    [0.000000027, 4.45467896965, 963.6465204549],
    [0.00000002778, 1.65860124839, 238.39750818919],
    [0.00000003029, 4.72630934575, 473.2185551834],
    [0.00000002671, 4.60029996028, 531.9405201482],
    [0.00000002914, 3.86169076602, 554.31380496631],
    [0.00000003087, 6.08851917121, 340.2664421304],
    [0.00000003438, 2.32466413132, 6171.40187101109],
    [0.00000002879, 5.61809470376, 218.6507223522],
    [0.0000000314, 5.02001385281, 609.1216151605],
    [0.00000003003, 0.53592571188, 464.97504399731],
    [0.00000003257, 1.52476284257, 305.96249389171],
    [0.00000003211, 5.64833047248, 416.532513406],
    [0.00000003265, 1.54950325507, 24.7347144563],
    [0.00000002644, 1.01963899758, 508.5941415757],
    [0.00000002764, 4.98225869197, 410.59462257279],
    [0.00000003428, 5.71088563789, 1012.6195056799],
    [0.00000002614, 4.07639961382, 213.5910970313],
    [0.00000003469, 5.28643352424, 24.14975911971],
    [0.00000002606, 0.81160096517, 213.4947288117],
    [0.00000003444, 2.56432157215, 891.57323487331],
    [0.0000000254, 4.32167771768, 564.8718702632],
    [0.0000000254, 4.32167771768, 565.35950523021],
    [0.00000002754, 2.69535555411, 57.5541899867],
    [0.00000002531, 0.59020723407, 800.5924346291],
    [0.00000002557, 0.6699925684, 341.49028240779],
    [0.00000002601, 4.54885591305, 261.2371761149],
    [0.00000003027, 0.2018330041, 331.07772159029],
    [0.00000002494, 0.58142193078, 203.9816853659],
    [0.0000000259, 1.76325981719, 1190.5420625756],
    [0.00000003494, 2.90876238684, 534.0793841623],
    [0.00000003144, 0.01981710217, 1503.9649868156],
    [0.00000002818, 3.61898449244, 49.31067880061],
    [0.00000002791, 4.48606671949, 288.32451148881],
    [0.00000002471, 1.23009614301, 411.11588743459],
    [0.00000003059, 3.30977686438, 172.48911597691],
    [0.00000002972, 0.30229231666, 569.29165849331],
    [0.00000003418, 5.40293550246, 638.3959986583],
    [0.00000002541, 4.99016167757, 1448.09090291091],
    [0.00000002663, 0.43151826022, 573.6968925084],
    [0.00000002439, 4.39632185677, 1625.9652756968],
    [0.00000002739, 5.72535305895, 112.8832650427],
    [0.00000002821, 5.66863744979, 402.93606672331],
    [0.00000003412, 1.2700798038, 772.8325844196],
    [0.00000002624, 5.8552885249, 1624.4808029885],
    [0.0000000317, 0.5368279695, 1011.13503297159],
    [0.00000002908, 4.60949958082, 635.94831810351],
    [0.00000002664, 2.68003479349, 409.41896640519],
    [0.00000003091, 1.88245278611, 379.25961975071],
    [0.00000003301, 1.91350932819, 19.7936613644],
    [0.00000003176, 3.29730129609, 300.9095662152],
    [0.00000003022, 5.94822554077, 52.0189917863],
    [0.0000000289, 1.53549747897, 293.4323209195],
    [0.00000002698, 1.69370735844, 78149.06650032569],
    [0.00000002558, 0.74578099458, 1371.3371966683],
    [0.00000002619, 3.80578981072, 202.0095776906],
    [0.00000003176, 3.75055063339, 10101.61156723069],
    [0.00000003341, 2.34080319182, 345.8955164229],
    [0.00000002373, 4.96475711609, 130.8513158457],
    [0.00000002644, 2.68099240015, 305.10235190919],
    [0.00000003339, 4.63303989765, 2849.2983147265],
    [0.0000000241, 1.58163612779, 951.8525527931],
    [0.00000003303, 2.2577129249, 769.5729459921],
    [0.00000003302, 4.85894681967, 90.1520274241],
    [0.00000002416, 6.00635580174, 527.929045008],
    [0.00000002361, 5.34789183737, 905.1214974462],
    [0.00000002737, 4.77190944455, 1206.2199993907],
    [0.00000002441, 3.82975575752, 246.73489546739],
    [0.00000002441, 0.68816310393, 247.2225304344],
    [0.00000002957, 4.258328115, 238.23075185041],
    [0.00000003263, 0.98630889937, 1506.93393223219],
    [0.00000003293, 5.93270574395, 66.1522096958],
    [0.00000003241, 3.43806050184, 978.4186233052],
    [0.00000003149, 3.64971867049, 271.9103693633],
    [0.00000003149, 3.6497186705, 271.4227343963],
    [0.00000002328, 5.07609916236, 31.738879],
    [0.00000002372, 0.6865207474, 309.0345051723],
    [0.00000002372, 3.82811340099, 309.5221401393],
    [0.00000002369, 4.33012817739, 418.9801939608],
    [0.00000003007, 4.64009260533, 1437.7814079574],
    [0.00000003034, 5.98346126252, 330.8627811417],
    [0.00000002345, 2.80677153952, 453.9318358609],
    [0.00000003118, 3.73398781358, 1434.81246254079],
    [0.00000002324, 3.85931736808, 495.2462652364],
    [0.0000000234, 5.41992470939, 452.43031681009],
    [0.00000002336, 0.0465583324, 189.591279303],
    [0.0000000292, 3.78758562864, 1549.69920442121],
    [0.00000002494, 0.79353025531, 1187.57311715899],
    [0.00000002692, 4.17807622816, 425.13053311509],
    [0.00000002874, 4.63267401857, 1654.2764513481],
    [0.00000002809, 5.67077170621, 317.5843407716],
    [0.00000002735, 3.9399020422, 1513.05064149171],
    [0.00000002949, 6.26993364897, 186.71620997851],
    [0.0000000232, 0.74326897219, 487.38195871019],
    [0.00000003113, 6.2090210961, 353.28425006961],
    [0.00000003086, 4.87476303199, 1230.5990217789],
    [0.00000002722, 2.16494792915, 49.6831858161],
    [0.00000003064, 3.68765217385, 133.13224006171],
    [0.00000003064, 3.68765217385, 132.64460509469],
    [0.0000000247, 2.78243316001, 532.3824631329],
    [0.0000000264, 0.5179097289, 394.33804701421],
    [0.00000002252, 1.8461300439, 22.6507321964],
    [0.00000003151, 5.26039361613, 859.77184894361],
    [0.00000002671, 0.92145640556, 37.3679532925],
    [0.0000000238, 0.86687455354, 429.2751346993],
    [0.00000002655, 2.72088152594, 484.1523808627],
    [0.00000003005, 3.02367934874, 1929.33933741419],
    [0.0000000255, 5.60497907633, 496.9431862658],
    [0.0000000229, 3.41120190653, 455.18681390559],
    [0.00000002608, 3.85525903926, 422.9580392062],
    [0.00000002226, 2.09977531258, 47.82620609231],
    [0.00000002233, 4.94028872789, 877.3461408717],
    [0.00000002764, 0.83501700112, 356.68058425589],
    [0.00000002719, 1.98953734068, 177.5823711926],
    [0.00000002999, 2.06885612973, 1926.37039199759],
    [0.00000002693, 3.57972778548, 6284.8041401832],
    [0.00000002369, 1.19578023344, 70.88081446661],
    [0.00000002498, 3.71851216671, 315.1512144318],
    [0.00000002204, 3.20466206592, 442.886135597],
    [0.00000002261, 3.32534753019, 621.2335891349],
    [0.00000002213, 6.16263836668, 1189.0575898673],
    [0.00000002492, 2.67366070604, 406.9712858504],
    [0.00000002976, 1.45402284302, 1014.1039783882],
    [0.0000000284, 5.3571050935, 522.3336006103],
    [0.0000000234, 1.7244862663, 440.43845504219],
    [0.00000003012, 1.13512104183, 15.9096922111],
    [0.00000003012, 4.27671369542, 16.3973271781],
    [0.00000002372, 0.24227395275, 132.5964209849],
    [0.00000002232, 2.42168492591, 158.12984768129],
    [0.00000002961, 4.37134416172, 286.3524038135],
    [0.00000002961, 4.37134416172, 286.8400387805],
];

const X1: &[Term] = &[
    [0.00357822049, 4.60537437341, 0.2438174835],
    [0.00256200629, 2.01693264233, 36.892380413],
    [0.00242677799, 5.46293481092, 39.86132582961],
    [0.00106073143, 3.07856435709, 37.88921815429],
    [0.00103735195, 6.08270773807, 38.3768531213],
    [0.00118508231, 2.88623136735, 76.50988875911],
    [0.00021930692, 3.20019569049, 35.40790770471],
    [0.00017445772, 4.26396070854, 41.3457985379],
    [0.00013038843, 5.36684741537, 3.21276290011],
    [0.00004928885, 2.0889320417, 73.5409433425],
    [0.00002742686, 4.06389633495, 77.9943614674],
    [0.00002155134, 4.11881068429, 4.6972356084],
    [0.000018828, 4.42038284259, 33.9234349964],
    [0.00001572888, 1.07810551784, 114.6429243969],
    [0.00001326507, 6.02985868883, 75.0254160508],
    [0.00001343094, 3.03838214796, 42.83027124621],
    [0.00000897979, 4.26993024752, 426.8420083595],
    [0.00000865617, 1.66618456177, 37.8555882595],
    [0.00000849963, 5.81599535394, 38.89811798311],
    [0.00000922754, 3.34516686314, 72.05647063421],
    [0.00000726258, 4.24833812431, 36.404745446],
    [0.0000077822, 5.84479856092, 206.42936592071],
    [0.00000754025, 5.33205816073, 220.6564599223],
    [0.00000607406, 0.10576615596, 1059.6257476727],
    [0.00000571831, 2.42930874906, 522.8212355773],
    [0.00000560995, 1.91555986158, 537.0483295789],
    [0.00000501078, 1.71335109406, 28.81562556571],
    [0.00000493238, 5.24702261334, 39.3736908626],
    [0.00000474802, 4.40715596351, 98.6561710411],
    [0.00000453975, 1.71443209341, 35.9291725665],
    [0.00000471731, 4.84217171915, 1.7282901918],
    [0.00000410057, 5.76579953705, 40.8245336761],
    [0.00000366899, 5.7675557293, 47.9380806769],
    [0.00000450109, 1.2567045155, 76.0222537921],
    [0.00000354347, 6.27109348494, 1.24065522479],
    [0.00000300159, 2.88687992256, 6.1817083167],
    [0.00000327501, 4.20479564636, 33.43580002939],
    [0.00000174973, 5.64027558321, 32.4389622881],
    [0.00000171503, 4.43985554308, 34.1840674273],
    [0.00000156749, 2.5954508441, 79.47883417571],
    [0.00000152549, 0.58219894744, 30.300098274],
    [0.00000150775, 3.03954929901, 42.5696388153],
    [0.0000016228, 0.79977049351, 31.2633061205],
    [0.00000131609, 1.62895622934, 7.83293736379],
    [0.00000136159, 4.57878446789, 70.5719979259],
    [0.00000134616, 0.39184091634, 45.49040012211],
    [0.00000116304, 0.61710594601, 46.4536079686],
    [0.00000115918, 1.8184333853, 44.31474395451],
    [0.00000110293, 6.26561089969, 35.4560918145],
    [0.00000099282, 5.06218386285, 2.7251279331],
    [0.00000099914, 1.21626942611, 41.2976144281],
    [0.00000108706, 3.09142093314, 113.15845168861],
    [0.00000088965, 4.26680850699, 60.52313540329],
    [0.00000086886, 5.46872067794, 31.9513273211],
    [0.00000072232, 3.50587405737, 640.1411037975],
    [0.00000086985, 4.80098575405, 419.72846135871],
    [0.0000007343, 4.36511226727, 70.08436295889],
    [0.00000053395, 4.46520807878, 433.9555553603],
    [0.00000057451, 1.0800373312, 213.5429129215],
    [0.00000051458, 4.01726374522, 69.3963417583],
    [0.00000048797, 6.01365170443, 111.67397898031],
    [0.00000048557, 6.248084811, 2.6769438233],
    [0.00000042206, 3.23823062186, 74.53778108379],
    [0.0000004255, 1.67247318349, 7.66618102501],
    [0.00000039462, 5.84051041865, 31.7845709823],
    [0.00000039445, 0.9463098691, 12.77399045571],
    [0.00000042389, 5.59019905902, 110.189506272],
    [0.00000044118, 0.44615133445, 1589.3167127673],
    [0.00000037988, 2.73850879415, 6.3484646555],
    [0.00000037802, 5.98781130211, 14.258463164],
    [0.0000003628, 6.27894536142, 273.8222308413],
    [0.00000037247, 4.62968774107, 73.0533083755],
    [0.00000036282, 2.85336450932, 84.5866436064],
    [0.00000040018, 4.27418471085, 4.4366031775],
    [0.000000324, 1.64328879813, 44.96913526031],
    [0.00000031842, 5.16652228087, 34.9202727377],
    [0.00000032037, 2.94551844856, 27.3311528574],
    [0.00000034456, 3.3715259936, 529.9347825781],
    [0.00000031208, 1.73420111381, 1052.51220067191],
    [0.00000030002, 2.33639558082, 1066.7392946735],
    [0.00000033805, 6.0411449647, 149.8070146181],
    [0.00000033096, 2.45794089359, 116.12739710521],
    [0.00000030571, 4.02151161164, 22.3900997655],
    [0.0000002402, 0.23821463973, 63.9797157869],
    [0.0000002378, 4.34619784366, 105.76971804189],
    [0.0000002311, 2.51348904373, 23.87457247379],
    [0.00000022233, 1.2158277735, 174.9222423167],
    [0.00000021377, 3.74139728076, 316.6356871401],
    [0.000000254, 4.52702077197, 106.73292588839],
    [0.00000020754, 0.94473828111, 5.6604434549],
    [0.00000025572, 5.46068636869, 529.44714761109],
    [0.00000019878, 1.01805940417, 32.9602271499],
    [0.00000019754, 4.49000124955, 49.42255338521],
    [0.00000019241, 6.01413524726, 7.14491616321],
    [0.00000017979, 1.48478132886, 62.4952430786],
    [0.00000019513, 5.64767624982, 68.5998902506],
    [0.00000018273, 5.20130356006, 227.77000692311],
    [0.00000017552, 5.80350239388, 69.0875252176],
    [0.00000016704, 3.94483252805, 40.8581635709],
    [0.00000016996, 1.10449263633, 91.54262404029],
    [0.000000168, 0.51632981099, 30.4668546128],
    [0.000000168, 0.51632981099, 30.95448957981],
    [0.000000164, 5.02426208775, 33.26904369061],
    [0.00000017242, 0.18352088447, 11.55015017831],
    [0.0000001559, 1.9926094696, 37.1048287341],
    [0.0000001559, 5.48957045033, 39.6488775085],
    [0.00000015469, 0.1993159132, 43.79347909271],
    [0.0000001659, 2.76837508684, 33.71098667531],
    [0.00000019347, 5.63498287914, 152.77596003471],
    [0.00000014994, 2.71995630411, 319.06881347989],
    [0.00000014395, 0.95950619453, 110.45013870291],
    [0.00000015528, 1.16348592635, 79.43065006591],
    [0.00000013727, 2.45811249773, 43.484662552],
    [0.00000013988, 3.9697967609, 4.2096006414],
    [0.00000014467, 0.42164709009, 108.70503356371],
    [0.00000016652, 3.17617180933, 304.84171947829],
    [0.00000015153, 3.21783791411, 72.31710306511],
    [0.0000001281, 2.37864271463, 11.2895177474],
    [0.00000012751, 0.61424962834, 45.7992166628],
    [0.00000013293, 4.71511827202, 43.0427195673],
    [0.00000012751, 2.55685741962, 515.70768857651],
    [0.00000011616, 2.50185569269, 97.17169833279],
    [0.00000011538, 6.20327139591, 633.0275567967],
    [0.00000011046, 1.26188662646, 25.8466801491],
    [0.00000011032, 3.82567311622, 4.8639919472],
    [0.00000011189, 3.94939417077, 83.1021708981],
    [0.0000001086, 0.38739756984, 9.8050450391],
    [0.00000010958, 1.48375898962, 415.04804069769],
    [0.00000010244, 0.26615444717, 71.09326278771],
    [0.00000011427, 1.50679043329, 129.6756596781],
    [0.00000009895, 5.62468142972, 251.6759485593],
    [0.00000009802, 1.83814841533, 44.48150029329],
    [0.00000011029, 4.69741395112, 143.38148881789],
    [0.00000009235, 5.99370019321, 199.3158189199],
    [0.00000008899, 3.54958918415, 7.3573644843],
    [0.00000007746, 5.89688581764, 103.3365917021],
    [0.00000008691, 3.86130807292, 32.7477788288],
    [0.00000007714, 5.08136079606, 65.46418849521],
    [0.00000008007, 1.80952555463, 544.1618765797],
    [0.00000007513, 1.47497152514, 69.6087900794],
    [0.00000007336, 5.00489054996, 15.7429358723],
    [0.00000007195, 6.14029832936, 949.4194264533],
    [0.00000009601, 0.96952505042, 80.963306884],
    [0.00000008094, 3.27383873772, 526.7533888404],
    [0.00000008109, 1.06293290956, 533.1161763158],
    [0.00000006906, 5.27751864757, 137.2768416459],
    [0.00000007455, 5.82601593331, 105.2484531801],
    [0.00000007826, 4.02401038086, 77.0311536209],
    [0.00000006529, 0.86598314454, 65.2035560643],
    [0.00000007134, 3.62090018772, 44.00592741381],
    [0.00000006186, 2.4210344452, 31.4757544416],
    [0.00000006186, 2.4210344452, 30.9881194746],
    [0.00000007698, 0.17876132177, 14.47091148511],
    [0.00000007434, 5.53413189412, 146.8380692015],
    [0.00000006317, 0.53538901275, 66.9486612035],
    [0.00000006903, 6.20818943193, 75.98862389731],
    [0.00000005591, 1.90701487438, 448.98829064149],
    [0.00000006425, 5.04706195455, 678.27413943531],
    [0.00000005483, 3.18327336885, 34.44469985821],
    [0.00000005483, 4.29890655108, 42.3090063844],
    [0.00000005519, 2.84195707915, 853.4401992355],
    [0.00000005483, 3.53790147295, 100.14064374939],
    [0.00000005483, 3.53790147295, 100.6282787164],
    [0.00000006288, 1.03240051727, 143.9027536797],
    [0.00000006239, 5.7806671055, 17.76992530181],
    [0.00000005246, 5.09114965169, 209.6107596584],
    [0.00000005331, 3.2647106481, 45.9659730016],
    [0.00000005131, 6.10583196953, 217.4750661846],
    [0.00000005325, 4.39759756568, 19.2543980101],
    [0.00000005172, 0.86928942503, 25.3590451821],
    [0.00000005139, 2.60427452606, 6.86972951729],
    [0.00000005992, 1.1928792499, 9.3174100721],
    [0.00000005011, 3.34804654196, 38.85242600079],
    [0.00000004975, 1.43964900757, 525.2543619171],
    [0.0000000491, 5.04787040559, 45.277951801],
    [0.0000000525, 4.87798510402, 0.719390363],
    [0.00000004731, 1.56230403811, 40.3825906914],
    [0.00000004731, 2.77828322823, 36.3711155512],
    [0.0000000591, 6.11804979728, 6168.43292559449],
    [0.000000047, 6.23394030506, 50.9070260935],
    [0.00000005127, 0.06949696047, 140.9338082631],
    [0.00000005321, 3.67018745291, 1104.87233031131],
    [0.00000006339, 2.59865692618, 10175.3963280567],
    [0.00000004983, 3.03193615352, 1090.6452363097],
    [0.00000005487, 4.85218420019, 180.03005174739],
    [0.0000000456, 3.95095239655, 323.74923414091],
    [0.00000004689, 1.24271255508, 1068.22376738181],
    [0.00000005562, 1.26401999292, 10098.64262181409],
    [0.00000004432, 2.40638908148, 415.7963080956],
    [0.00000004456, 6.17485306628, 235.68919520349],
    [0.00000004289, 5.97528879519, 1051.0277279636],
    [0.00000004145, 3.13378236518, 33.6964324603],
    [0.00000004167, 1.72807331665, 416.532513406],
    [0.00000004107, 2.49036069416, 61.01077037031],
    [0.00000004088, 5.45739808026, 423.66061462181],
    [0.00000005027, 4.43953537205, 21.7020785649],
    [0.0000000403, 5.01269280095, 216.72430665921],
    [0.00000004278, 4.65333719777, 310.4707937708],
    [0.00000004013, 1.39689438468, 104275.10267753768],
    [0.00000004505, 1.22507263591, 291.9478482112],
    [0.00000003959, 6.1803460733, 210.36151918381],
    [0.00000003962, 4.02082978591, 978.93988816699],
    [0.00000005561, 1.74843583918, 1409.47023230609],
    [0.00000005073, 3.58205424554, 1498.3359125231],
    [0.00000004227, 1.48715312131, 534.38820070301],
    [0.00000004054, 4.02884108627, 430.02340209721],
    [0.00000003863, 2.2426403192, 1127.50624756031],
    [0.00000004367, 1.71153359581, 58.9837809408],
    [0.00000004694, 3.33961949377, 77.5067265004],
    [0.00000004144, 3.59057653937, 518.1408149163],
    [0.00000004289, 3.29776439152, 921.3206991231],
    [0.00000004039, 3.79987840474, 1622.76932774409],
    [0.0000000518, 5.37115331697, 99.1438060081],
    [0.00000004845, 6.04321981604, 136.78920667889],
    [0.00000004827, 2.7845934634, 418.2439886504],
    [0.00000003722, 0.22932453326, 1065.2548219652],
    [0.00000004729, 3.76762324044, 421.212934067],
    [0.0000000349, 5.25995346649, 986.8041946932],
    [0.00000003715, 6.02151166051, 254.10907489909],
    [0.00000003488, 1.23861297869, 187.9400502559],
    [0.00000003989, 3.79961685835, 95.7354097343],
    [0.00000003603, 0.65230587403, 67.1154175423],
    [0.0000000353, 2.51065807549, 24.36220744081],
    [0.00000003538, 3.09031960755, 57.4993082325],
    [0.00000003838, 1.99815683749, 979.90309601349],
    [0.00000003615, 3.17553643085, 493.2862196486],
    [0.00000003457, 0.2286525426, 807.70598162989],
    [0.00000003648, 3.01000228275, 647.25465079831],
    [0.00000004048, 4.68171378592, 979.69064769239],
    [0.00000004414, 3.57495606042, 1062.59469308931],
    [0.00000003631, 2.3192112757, 486.1726726478],
    [0.00000003347, 5.70639780704, 151.2914873264],
    [0.00000003305, 0.5215895466, 1544.07013012871],
    [0.00000003428, 1.68792809396, 107.2205608554],
    [0.00000003286, 5.12949558917, 1131.6990332543],
    [0.00000003389, 1.65565102713, 28.98238190449],
    [0.00000003353, 3.87388681549, 10289.7954349701],
    [0.00000003214, 2.40799794941, 569.5522909242],
    [0.0000000321, 5.76688710335, 114.1552894299],
    [0.00000003353, 3.19692974184, 157.8837694654],
    [0.00000003339, 3.69632773816, 443.0985839181],
    [0.00000003188, 1.05807532391, 361.13400238079],
    [0.0000000339, 0.82325646834, 1558.2972241303],
    [0.00000003933, 0.51543027693, 313.43973918739],
    [0.00000003131, 5.23811887945, 275.3067035496],
    [0.00000003156, 4.66486358528, 431.8404353331],
    [0.00000003993, 3.33001170426, 67.6366824041],
    [0.00000003708, 1.81916567333, 500.39976664941],
    [0.00000004051, 2.84746860357, 59.038662695],
    [0.00000003757, 3.59917867608, 296.4012663361],
    [0.00000003138, 5.35145867078, 347.1193567003],
    [0.00000003086, 3.24315098824, 392.9017584157],
    [0.00000003466, 0.02941146445, 215.1941419686],
    [0.00000003139, 4.6707913965, 159.36824217371],
    [0.00000003466, 1.90282193275, 2145.34674583789],
    [0.00000003737, 1.95939265626, 449.0364747513],
    [0.00000003286, 3.39700619187, 435.44002806861],
    [0.00000003043, 3.45909355839, 2.20386307129],
    [0.00000003999, 1.21766663097, 6245.1866318371],
    [0.00000003999, 4.35925928456, 6244.69899687009],
    [0.00000002999, 1.64598289911, 526.00262931501],
    [0.00000003014, 3.95092279768, 1054.94532701169],
    [0.00000003091, 2.95397758261, 42.997027585],
    [0.00000003274, 1.10162661548, 736.1203310153],
    [0.00000002965, 2.69144881941, 533.8669358412],
    [0.00000003149, 0.77764778909, 103.7639804718],
    [0.0000000361, 3.04477019722, 55.05162767771],
    [0.00000002937, 4.36852075939, 385.2523923381],
    [0.00000002903, 5.92315544183, 117.5636857037],
    [0.00000002968, 2.85171539624, 613.31440085451],
    [0.00000003097, 2.85040396879, 1395.24313830449],
    [0.00000002931, 5.17875295945, 202.4972126576],
    [0.00000003013, 3.0660592928, 121.2352065359],
    [0.00000003206, 1.29027400076, 53.40958840249],
    [0.00000003269, 5.16847517364, 480.00777927849],
    [0.00000003948, 3.85972628729, 112.8832650427],
    [0.00000002824, 1.57846497121, 176.406715025],
    [0.00000002827, 1.93940329091, 429.81095377611],
    [0.00000003348, 5.12243609352, 6284.8041401832],
    [0.00000002862, 0.86276885894, 384.02855206069],
    [0.00000003228, 0.4245759802, 52.6039471229],
    [0.00000003446, 3.75606585057, 62.0076081116],
    [0.00000003096, 3.26760360935, 71.82946809809],
    [0.00000003031, 4.66996407487, 494.2348732801],
    [0.00000003021, 1.39292760491, 328.5964111407],
    [0.00000002731, 2.36952809744, 432.471082652],
    [0.00000003171, 0.25949036332, 10215.0138364028],
    [0.00000002674, 0.72177739894, 158.12984768129],
    [0.00000002901, 5.8002736505, 559.4697985068],
    [0.00000002631, 5.7814625238, 2008.8013566425],
    [0.00000002695, 5.11715867535, 81.61769818981],
    [0.00000002695, 1.97556602176, 81.13006322279],
    [0.00000002721, 2.68965946829, 326.1823604807],
    [0.00000002775, 5.84695952836, 457.8614969965],
    [0.00000003054, 1.52217085552, 6281.8351947666],
    [0.00000002852, 4.47706032032, 186.71620997851],
    [0.00000002538, 0.16145086268, 111.18634401329],
    [0.00000002835, 4.50055998275, 419.50145882259],
    [0.00000002868, 2.09813621145, 844.56699288049],
    [0.0000000253, 1.04013419881, 1050.7525413177],
    [0.00000002843, 2.5889262862, 830.3398988789],
    [0.00000002848, 3.1225076568, 659.36662477269],
    [0.00000003031, 4.13022602708, 406.3469551246],
    [0.00000002907, 5.28583383732, 573.6968925084],
    [0.00000002536, 3.44172011173, 82.6145359311],
    [0.00000002957, 0.45041658093, 947.70795120889],
    [0.00000003321, 2.30536254604, 449.9996825978],
    [0.00000003117, 3.17172140219, 457.32567791969],
    [0.00000002902, 2.94761781535, 10212.0448909862],
    [0.00000002459, 2.17142711813, 450.73339578069],
    [0.00000002557, 2.89791026532, 525.4813644532],
    [0.00000002624, 1.78027142371, 946.2234785006],
    [0.00000002417, 4.8093635085, 351.5727748252],
    [0.00000002454, 4.84992044892, 196.01680510321],
    [0.00000002585, 0.99587951695, 248.70700314271],
    [0.00000002549, 1.80324449988, 1062.80714141041],
    [0.00000002615, 2.49010683388, 425.13053311509],
    [0.00000002387, 3.61270640757, 654.3681977991],
    [0.00000002439, 6.16957116292, 462.74230389109],
    [0.00000002367, 4.32238656757, 107.52937739611],
    [0.00000002538, 2.61932649618, 481.2316195559],
    [0.00000002479, 1.99143603619, 205.9417309537],
    [0.00000002791, 0.73480816467, 24.14975911971],
    [0.00000002626, 1.16663444616, 213.0552779545],
    [0.00000002445, 4.84988920933, 146.87169909629],
    [0.00000002575, 1.89431453798, 86.07111631471],
    [0.0000000312, 5.91742201237, 456.36247007319],
    [0.00000002587, 0.0222487346, 400.8209466961],
    [0.00000002261, 4.8206684515, 644.33388949151],
    [0.00000002796, 5.01395178381, 216.67861467689],
    [0.00000002896, 2.29072801127, 1685.2959399851],
    [0.00000002453, 3.24288673382, 109.9625037359],
    [0.00000002325, 4.96633817815, 442.886135597],
    [0.00000002387, 5.32424727918, 599.0873068529],
    [0.00000002873, 3.5635120817, 834.5326845729],
    [0.00000002963, 0.7702171499, 2119.00767786191],
    [0.00000002233, 5.94426610995, 709.29362807231],
    [0.00000002337, 4.30558394222, 210.5739675049],
    [0.00000002259, 3.67528651606, 29.5036467663],
    [0.000000023, 0.62755545112, 986.0534351678],
    [0.00000002199, 2.78438991669, 606.2008538537],
    [0.00000002325, 3.26991047297, 109.701871305],
];

const X2: &[Term] = &[
    [0.01620002167, 0.60038473142, 38.3768531213],
    [0.00028138323, 5.58440767451, 0.2438174835],
    [0.00012318619, 2.58513114618, 39.86132582961],
    [0.00008346956, 5.13440715484, 37.88921815429],
    [0.00005131003, 5.1297407592, 76.50988875911],
    [0.00004109792, 1.4649502613, 36.892380413],
    [0.00001369663, 3.5576271505, 1.7282901918],
    [0.00000633706, 2.38135108376, 3.21276290011],
    [0.00000583006, 1.54592369321, 41.3457985379],
    [0.00000546517, 0.70972594452, 75.0254160508],
    [0.00000246224, 2.44618778574, 213.5429129215],
    [0.00000159773, 1.26414365966, 206.42936592071],
    [0.00000156619, 3.61656709171, 220.6564599223],
    [0.00000191674, 2.17166123081, 529.9347825781],
    [0.00000188212, 4.43184732741, 35.40790770471],
    [0.00000117788, 4.12530218101, 522.8212355773],
    [0.00000114488, 0.05081176794, 35.9291725665],
    [0.00000112666, 0.21220394551, 537.0483295789],
    [0.00000105949, 1.13080468733, 40.8245336761],
    [0.00000077696, 0.84633184914, 77.9943614674],
    [0.00000090798, 2.05479887039, 73.5409433425],
    [0.00000067696, 2.44679430551, 426.8420083595],
    [0.0000007486, 1.44346648461, 4.6972356084],
    [0.00000064717, 6.0600147115, 34.9202727377],
    [0.00000051378, 6.13002795973, 36.404745446],
    [0.00000050205, 0.67007332287, 42.83027124621],
    [0.00000040929, 6.22049348014, 33.9234349964],
    [0.00000036136, 6.15460243008, 98.6561710411],
    [0.00000033953, 5.0256830205, 1059.6257476727],
    [0.00000034603, 3.26702076082, 76.0222537921],
    [0.00000035441, 2.49518827466, 31.2633061205],
    [0.00000029614, 3.34814694529, 28.81562556571],
    [0.00000031027, 4.97087448592, 45.49040012211],
    [0.00000035521, 1.13028002523, 39.3736908626],
    [0.00000025488, 4.04320892614, 47.9380806769],
    [0.00000020115, 3.93227849656, 1.24065522479],
    [0.00000014328, 2.73754899228, 433.9555553603],
    [0.00000015503, 3.13160557995, 114.6429243969],
    [0.00000016998, 0.93393874821, 33.43580002939],
    [0.00000013166, 0.39556817176, 419.72846135871],
    [0.00000013053, 6.11304367644, 60.52313540329],
    [0.00000010637, 5.94332175983, 34.1840674273],
    [0.0000000961, 1.65699013342, 640.1411037975],
    [0.00000009354, 1.41415954295, 42.5696388153],
    [0.00000011447, 6.19793150566, 71.5688356672],
    [0.00000008454, 2.755621698, 2.7251279331],
    [0.00000009012, 4.44112001347, 72.05647063421],
    [0.00000009594, 5.79483289118, 69.3963417583],
    [0.00000007419, 3.4964534523, 227.77000692311],
    [0.000000068, 5.14250085135, 113.15845168861],
    [0.00000006267, 0.79586518424, 1066.7392946735],
    [0.00000006895, 4.31090775556, 111.67397898031],
    [0.0000000577, 1.23253284004, 32.4389622881],
    [0.00000005686, 2.2380592385, 30.300098274],
    [0.00000006679, 4.85529332414, 258.78949556011],
    [0.00000007799, 1.58396135295, 7.3573644843],
    [0.00000005906, 5.92485931723, 44.31474395451],
    [0.00000005606, 5.17941805418, 46.4536079686],
    [0.00000005525, 3.61911776351, 1052.51220067191],
    [0.00000007257, 0.17315189128, 1097.7587833105],
    [0.00000005427, 1.80586256737, 105.76971804189],
    [0.00000005179, 4.2598619425, 515.70768857651],
    [0.00000005163, 6.27919257182, 7.83293736379],
    [0.00000004688, 2.52139212878, 222.14093263061],
    [0.00000005379, 5.86341629561, 22.3900997655],
    [0.00000004607, 4.89100806572, 549.1603035533],
    [0.00000004101, 0.29016053329, 213.0552779545],
    [0.00000004262, 5.51395238453, 204.9448932124],
    [0.00000003916, 0.21419544093, 207.913838629],
    [0.00000004089, 4.97684127402, 304.84171947829],
    [0.00000003729, 1.40848954224, 199.3158189199],
    [0.0000000368, 5.5480931863, 1589.3167127673],
    [0.00000003702, 1.01863119774, 319.06881347989],
    [0.00000004832, 1.26423594188, 215.0273856298],
    [0.00000003474, 1.17401543445, 103.3365917021],
    [0.00000003298, 0.10619126376, 544.1618765797],
    [0.00000004521, 0.07911565781, 108.2173985967],
    [0.00000003967, 2.67776762695, 944.7390057923],
    [0.00000004059, 3.01104350847, 149.8070146181],
    [0.00000004009, 5.61852534309, 533.1161763158],
    [0.00000003288, 1.44957894842, 407.9344936969],
    [0.00000003976, 5.00221858099, 526.7533888404],
    [0.00000003343, 0.65785646071, 531.4192552864],
    [0.00000003932, 3.66244745467, 91.54262404029],
    [0.00000003478, 6.19876429652, 6.1817083167],
    [0.00000002967, 1.04478648324, 860.55374623631],
    [0.00000003058, 0.02482940557, 342.9747551161],
    [0.00000003974, 2.0491026952, 335.8612081153],
    [0.00000002849, 0.86611245106, 666.4801717735],
    [0.00000002999, 1.27874757189, 937.62545879149],
    [0.00000003008, 5.16783990611, 74.53778108379],
    [0.0000000308, 3.04902400148, 129.6756596781],
    [0.00000003346, 4.64303639862, 1162.7185218913],
    [0.00000002625, 1.69459459452, 273.8222308413],
    [0.00000002931, 1.57809055514, 235.68919520349],
    [0.00000002579, 0.48473918174, 1073.85284167431],
    [0.0000000255, 6.14366282644, 26.58288545949],
    [0.00000002542, 4.22297682017, 1265.81129610991],
    [0.00000002483, 1.73279038376, 453.1810763355],
    [0.00000002732, 1.76626805419, 563.38739755489],
    [0.00000002508, 1.67664275102, 37.8555882595],
    [0.00000002508, 0.340768945, 425.35753565121],
    [0.0000000268, 5.74609617365, 454.6655490438],
    [0.00000002511, 3.15018930028, 209.6107596584],
    [0.00000002512, 1.74477024139, 217.4750661846],
    [0.00000002552, 5.67032305105, 79.47883417571],
    [0.00000002457, 2.67033044982, 38.89811798311],
    [0.00000002343, 1.93599816349, 981.3875687218],
    [0.00000002501, 1.67412173715, 669.4009330803],
    [0.0000000233, 3.95065162563, 38.32866901151],
    [0.00000002327, 0.3947499326, 38.4250372311],
    [0.00000002481, 5.56752927904, 655.1738390787],
    [0.00000002569, 4.22623902188, 464.97504399731],
];

const X3: &[Term] = &[
    [0.00000985355, 0.69240373955, 38.3768531213],
    [0.00000482798, 0.83271959724, 37.88921815429],
    [0.00000416447, 0.37037561694, 0.2438174835],
    [0.00000303825, 0.53797420117, 39.86132582961],
    [0.00000089203, 1.52338099991, 36.892380413],
    [0.00000070862, 5.8389974401, 76.50988875911],
    [0.000000289, 5.65001946959, 41.3457985379],
    [0.00000022279, 2.95886685234, 206.42936592071],
    [0.0000002148, 1.87359273442, 220.6564599223],
    [0.00000016157, 5.83581915834, 522.8212355773],
    [0.00000015714, 4.76719570238, 537.0483295789],
    [0.00000011404, 2.2596115491, 35.40790770471],
    [0.00000013199, 0.06057423298, 7.3573644843],
    [0.00000007024, 0.69890179308, 3.21276290011],
    [0.00000006772, 1.19679143435, 69.3963417583],
    [0.00000004517, 3.28893027439, 45.49040012211],
    [0.00000004523, 4.18705629066, 31.2633061205],
    [0.00000003682, 1.47261975259, 98.6561710411],
    [0.00000003656, 0.60146659814, 968.64494742849],
    [0.00000003927, 0.54740561653, 426.8420083595],
    [0.00000003199, 1.6732701626, 1519.6765535255],
    [0.00000003498, 3.27476696786, 407.9344936969],
    [0.00000003304, 2.24745680549, 422.1615876985],
    [0.00000003331, 1.97045240379, 36.404745446],
    [0.00000003244, 2.85168281358, 484.2005649725],
    [0.00000002689, 0.89932845788, 441.06910236111],
    [0.00000003247, 1.76512860403, 498.42765897409],
    [0.00000002651, 0.45669916115, 304.84171947829],
    [0.00000002645, 5.61672793904, 461.77909604459],
    [0.00000002542, 5.76347018476, 444.5830566264],
    [0.00000002524, 0.7573962509, 433.9555553603],
    [0.00000002472, 5.63416184223, 319.06881347989],
    [0.00000002355, 0.46192754883, 447.552002043],
    [0.00000002876, 5.22513442854, 853.4401992355],
    [0.00000002279, 4.63709500769, 458.810150628],
    [0.00000002147, 2.63611189369, 175.40987728371],
    [0.00000002637, 3.63693499332, 73.5409433425],
];

const X4: &[Term] = &[
    [0.00003455306, 3.61464892215, 38.3768531213],
    [0.00000047405, 2.21390996774, 0.2438174835],
    [0.00000021936, 2.72972488197, 37.88921815429],
    [0.00000015596, 1.8785412156, 76.50988875911],
    [0.00000017186, 5.53785371687, 39.86132582961],
    [0.00000017459, 4.82899740364, 36.892380413],
    [0.00000004229, 1.43245860878, 515.70768857651],
    [0.00000004334, 5.41648117577, 433.9555553603],
    [0.00000003547, 5.75561157107, 989.98558843089],
    [0.00000003155, 4.85322840051, 467.40817033709],
    [0.00000003017, 0.06479449145, 227.77000692311],
    [0.00000002981, 0.29920864811, 1.7282901918],
    [0.00000002295, 0.13749342692, 220.6564599223],
    [0.00000002296, 4.70646260044, 206.42936592071],
];

const X5: &[Term] = &[
    [0.00000026291, 3.717247302, 38.3768531213],
];

const Y0: &[Term] = &[
    [30.0597310058, 3.74109000403, 38.3768531213],
    [0.40567587218, 2.41070337452, 0.2438174835],
    [0.13506026414, 1.92976188293, 76.50988875911],
    [0.15716341901, 4.82548976006, 36.892380413],
    [0.14935642614, 5.79716600101, 39.86132582961],
    [0.02590782232, 0.42530135542, 1.7282901918],
    [0.01073890204, 3.81397520876, 75.0254160508],
    [0.00816388197, 5.49424416077, 3.21276290011],
    [0.00702768075, 6.16602540157, 35.40790770471],
    [0.00687594822, 2.29155372023, 37.88921815429],
    [0.00565555652, 4.41864141199, 41.3457985379],
    [0.00495650075, 5.31196432386, 529.9347825781],
    [0.0030602538, 5.11155686178, 73.5409433425],
    [0.00272446904, 5.58643013675, 213.5429129215],
    [0.00135892298, 3.97575347243, 77.9943614674],
    [0.00122117697, 2.8794350946, 34.9202727377],
    [0.00090968285, 0.11807115994, 114.6429243969],
    [0.000689154, 4.2639074172, 4.6972356084],
    [0.0004037068, 1.09050058383, 33.9234349964],
    [0.00028891307, 3.21868082836, 42.83027124621],
    [0.00029247752, 0.05239890051, 72.05647063421],
    [0.00025576289, 3.05422599686, 71.5688356672],
    [0.00020517968, 4.12700709797, 33.43580002939],
    [0.00012614154, 1.99850111659, 113.15845168861],
    [0.00012788929, 1.16690001367, 111.67397898031],
    [0.00012013477, 5.66154697546, 1059.6257476727],
    [0.00009854638, 1.8279327392, 36.404745446],
    [0.00008385825, 3.22321843541, 108.2173985967],
    [0.00007577585, 4.81209675667, 426.8420083595],
    [0.00006452053, 3.05476893393, 6.1817083167],
    [0.00006551074, 3.4896368347, 1.24065522479],
    [0.00004652534, 4.81582901104, 37.8555882595],
    [0.00004732958, 2.52632268239, 79.47883417571],
    [0.00004557247, 5.80951559837, 38.89811798311],
    [0.0000432255, 0.80665146695, 38.32866901151],
    [0.00004315539, 3.53393508109, 38.4250372311],
    [0.00004089036, 0.42349431022, 37.4136452748],
    [0.00004248658, 4.06300076615, 28.81562556571],
    [0.00004622142, 4.31075084247, 70.08436295889],
    [0.00003926447, 3.91895428213, 39.34006096781],
    [0.00003148422, 0.47516466537, 76.0222537921],
    [0.00003940981, 3.8684600937, 98.6561710411],
    [0.00003323363, 3.11696612599, 4.4366031775],
    [0.00003282964, 4.38630915294, 39.3736908626],
    [0.00003110464, 0.27337264525, 47.9380806769],
    [0.00002927062, 1.26687681282, 70.5719979259],
    [0.00002748919, 2.29910620256, 32.4389622881],
    [0.00003316668, 3.3927371688, 144.8659615262],
    [0.00002822405, 5.35210680933, 31.9513273211],
    [0.00002695972, 2.28196668869, 110.189506272],
    [0.0000252299, 6.23388252645, 311.9552664791],
    [0.00001888129, 1.6338505055, 35.9291725665],
    [0.00001648229, 2.49960621702, 30.300098274],
    [0.00001826545, 2.00941496239, 44.31474395451],
    [0.00001956241, 2.57436514192, 206.42936592071],
    [0.00001681257, 2.70480495091, 40.8245336761],
    [0.00001533383, 5.88971111646, 38.26497853671],
    [0.00001893076, 5.46256301015, 220.6564599223],
    [0.00001527526, 4.7341253634, 38.4887277059],
    [0.00002085691, 6.28187170642, 149.8070146181],
    [0.00002070612, 4.396614394, 136.78920667889],
    [0.00001535699, 2.18492948354, 73.0533083755],
    [0.00001667976, 4.4879209167, 106.73292588839],
    [0.0000128962, 1.8262922842, 46.4536079686],
    [0.00001559811, 5.27109740006, 38.11622069041],
    [0.00001545705, 5.35267674075, 38.6374855522],
    [0.00001435033, 5.44094847718, 522.8212355773],
    [0.00001406206, 2.04637394879, 537.0483295789],
    [0.00001256446, 1.13828126057, 34.1840674273],
    [0.00001387973, 2.14763765402, 116.12739710521],
    [0.00001457739, 3.56061267693, 181.5145244557],
    [0.00001228429, 1.21566711155, 72.31710306511],
    [0.00001140665, 5.53723346032, 7.83293736379],
    [0.00001080801, 3.18403832376, 42.5696388153],
    [0.00001201409, 2.31627619186, 2.7251279331],
    [0.00001228671, 1.08170099047, 148.32254190981],
    [0.00000722014, 4.59727081765, 152.77596003471],
    [0.00000608545, 2.92457352888, 35.4560918145],
    [0.00000722865, 4.66419895504, 143.38148881789],
    [0.0000063282, 1.84622497362, 7.66618102501],
    [0.00000642369, 5.54570420373, 68.5998902506],
    [0.00000553789, 1.41527095431, 41.2976144281],
    [0.00000682276, 3.72885979362, 218.1630873852],
    [0.00000463186, 1.17340921668, 31.7845709823],
    [0.0000052156, 1.91893273311, 0.719390363],
    [0.00000437892, 6.01046620661, 1589.3167127673],
    [0.00000398091, 0.79544793472, 6.3484646555],
    [0.00000384065, 3.15552603467, 44.96913526031],
    [0.00000395583, 3.4844804471, 108.70503356371],
    [0.00000327446, 4.26279342171, 60.52313540329],
    [0.00000358824, 0.28673200218, 30.4668546128],
    [0.00000315179, 1.74548132888, 74.53778108379],
    [0.00000343384, 0.17566264278, 0.7650823453],
    [0.00000399611, 3.76461168231, 31.2633061205],
    [0.00000314611, 1.41723391958, 419.72846135871],
    [0.00000347596, 4.83723596339, 180.03005174739],
    [0.00000382279, 1.78844211361, 487.1213262793],
    [0.00000300918, 2.47842979419, 69.0875252176],
    [0.00000340448, 2.3346721695, 146.8380692015],
    [0.0000029871, 3.60933906971, 84.5866436064],
    [0.00000290629, 0.17794042595, 110.45013870291],
    [0.00000336211, 0.5773546605, 45.49040012211],
    [0.00000305606, 4.06185849299, 640.1411037975],
    [0.00000333702, 3.90017949649, 254.8116503147],
    [0.0000026806, 1.73772568979, 37.0042549976],
    [0.0000026476, 2.55644426185, 39.749451245],
    [0.0000031524, 1.15162155813, 388.70897272171],
    [0.00000227098, 6.16236913832, 273.8222308413],
    [0.00000306112, 0.18265553789, 6283.3196674749],
    [0.00000284373, 1.79060192705, 12.77399045571],
    [0.00000221105, 5.08019996555, 213.0552779545],
    [0.00000242568, 0.4935801733, 14.258463164],
    [0.00000241087, 5.73194988554, 105.2484531801],
    [0.00000226136, 1.26736306174, 80.963306884],
    [0.00000245904, 5.25701422242, 27.3311528574],
    [0.00000265825, 5.68032293038, 944.7390057923],
    [0.00000207893, 3.50733218656, 30.95448957981],
    [0.00000214661, 1.08322862012, 316.6356871401],
    [0.00000190638, 0.75588071076, 69.3963417583],
    [0.00000246295, 3.55718121196, 102.84895673509],
    [0.00000202915, 2.17108892757, 415.04804069769],
    [0.00000176465, 4.85970190916, 36.7805058284],
    [0.00000193886, 4.92555932032, 174.9222423167],
    [0.00000175209, 5.83814591553, 39.97320041421],
    [0.00000177868, 5.01003024093, 216.67861467689],
    [0.00000138494, 3.88186287753, 75.98862389731],
    [0.00000152234, 3.24582472092, 11.2895177474],
    [0.00000147648, 0.11464073993, 151.2914873264],
    [0.00000156202, 5.22332207731, 146.3504342345],
    [0.00000152289, 1.64425361444, 23.87457247379],
    [0.00000177911, 1.60563922042, 10213.5293636945],
    [0.00000162474, 2.562717587, 63.9797157869],
    [0.00000121226, 3.53504653517, 38.16440480021],
    [0.00000129049, 2.23605274276, 37.1048287341],
    [0.00000120334, 0.80557581782, 38.5893014424],
    [0.00000168977, 4.06631471177, 291.4602132442],
    [0.00000121138, 6.20896007337, 33.26904369061],
    [0.00000129366, 0.79823378243, 45.7992166628],
    [0.00000144682, 5.34262329825, 49.42255338521],
    [0.00000122915, 2.10353894081, 39.6488775085],
    [0.000001134, 5.13399083059, 83.1021708981],
    [0.00000154892, 0.17909436973, 77.4730966056],
    [0.00000106737, 2.14516700774, 4.8639919472],
    [0.00000104756, 4.39192437833, 43.484662552],
    [0.00000125142, 1.11541363958, 4.2096006414],
    [0.00000103541, 3.68555108825, 41.08516610701],
    [0.00000133573, 5.4922684846, 182.998997164],
    [0.00000103627, 0.72176478921, 35.6685401356],
    [0.00000116874, 3.84298763857, 62.4952430786],
    [0.00000098063, 1.68574394986, 9.8050450391],
    [0.00000111411, 5.91424942326, 141.8970161096],
    [0.00000114294, 3.99149302956, 633.0275567967],
    [0.00000104705, 4.68992506677, 433.9555553603],
    [0.00000121306, 3.01971978017, 40.8581635709],
    [0.00000096954, 4.60293836623, 1052.51220067191],
    [0.00000085104, 3.21938589681, 36.6799320919],
    [0.00000085209, 1.23258290286, 105.76971804189],
    [0.00000085291, 4.16574840077, 109.701871305],
    [0.0000008326, 1.57705309557, 529.44714761109],
    [0.000000802, 1.12120137014, 40.07377415071],
    [0.00000107927, 4.7280976812, 1162.7185218913],
    [0.00000095241, 5.1818188928, 253.32717760639],
    [0.00000089535, 1.68098752171, 32.9602271499],
    [0.00000089793, 1.19350927545, 65.46418849521],
    [0.00000072027, 4.82605474115, 36.9405645228],
    [0.00000080381, 0.49818419813, 67.1154175423],
    [0.00000099502, 4.10090280616, 453.1810763355],
    [0.00000088685, 6.05087292163, 251.6759485593],
    [0.00000094971, 5.68681980258, 219.6475600935],
    [0.00000077015, 3.73580633492, 5.6604434549],
    [0.00000069098, 3.42063825132, 22.3900997655],
    [0.00000079079, 5.69904586697, 44.48150029329],
    [0.00000069159, 2.38821700872, 1066.7392946735],
    [0.00000064446, 2.45996531968, 66.9486612035],
    [0.00000088518, 4.23259429373, 328.1087761737],
    [0.00000065817, 6.14060374302, 36.3711155512],
    [0.00000071422, 2.66025338551, 43.79347909271],
    [0.00000063298, 0.64067085772, 9.1506537333],
    [0.0000007732, 1.8392235349, 97.17169833279],
    [0.00000073912, 3.2947727111, 2.6769438233],
    [0.00000073965, 3.98729910569, 2.9521304692],
    [0.00000056194, 2.88777806681, 949.4194264533],
    [0.00000059173, 2.98452265287, 100.14064374939],
    [0.00000067507, 2.37620743833, 7.14491616321],
    [0.00000071718, 2.50472239979, 2.20386307129],
    [0.00000063606, 3.60095909928, 25.8466801491],
    [0.00000071523, 3.62910110768, 662.28738607949],
    [0.00000057219, 5.59723911326, 15.7429358723],
    [0.00000050322, 5.79549186801, 37.15301284391],
    [0.00000066615, 1.8538263198, 846.3266522347],
    [0.0000005622, 6.09466556848, 178.5455790391],
    [0.00000067883, 2.31467094623, 224.5886131854],
    [0.00000057761, 3.59414048269, 145.35359649321],
    [0.00000053973, 4.68325129609, 107.2205608554],
    [0.00000057588, 0.13600413206, 25.3590451821],
    [0.00000049026, 5.99075269953, 19.2543980101],
    [0.00000063036, 5.86840206029, 256.296123023],
    [0.00000045304, 5.57731819351, 4.1759707466],
    [0.00000045669, 0.60467903265, 117.6118698135],
    [0.00000052821, 5.35013106251, 289.97574053589],
    [0.00000044016, 0.68418990599, 32.7477788288],
    [0.00000042933, 1.50265323283, 28.98238190449],
    [0.00000038369, 5.07841615051, 39.6006933987],
    [0.00000038805, 2.55324300089, 103.3365917021],
    [0.00000037679, 4.97176992254, 9.3174100721],
    [0.00000040292, 1.32694372497, 111.18634401329],
    [0.00000050011, 4.6288707929, 221.61966776881],
    [0.00000037056, 3.05929116522, 8.32057233081],
    [0.00000036562, 1.75628268654, 448.98829064149],
    [0.00000044628, 5.39841763538, 525.2543619171],
    [0.00000038213, 4.99269276748, 75.54668091261],
    [0.00000045963, 2.49324091181, 183.486632131],
    [0.00000048222, 4.38408318526, 364.7573391032],
    [0.00000038164, 3.66287516322, 44.00592741381],
    [0.00000047779, 4.6219311807, 3340.8562441833],
    [0.00000042228, 4.07611308238, 77.0311536209],
    [0.00000035247, 4.92005743728, 34.7535163989],
    [0.00000046804, 5.53981795511, 33.6964324603],
    [0.00000034352, 5.79527968049, 33.71098667531],
    [0.00000034949, 3.58463727178, 3.37951923889],
    [0.0000003603, 0.60196271868, 71.09326278771],
    [0.00000038112, 0.94232057009, 45.9659730016],
    [0.00000033119, 3.70714424363, 7.3573644843],
    [0.00000032049, 3.04761071508, 34.44469985821],
    [0.0000003191, 0.20811343013, 81.61769818981],
    [0.00000038697, 1.09830424446, 184.97110483931],
    [0.00000041486, 4.15630010756, 310.4707937708],
    [0.00000038631, 0.74636164144, 50.9070260935],
    [0.00000042711, 0.62152472293, 1021.49271203491],
    [0.00000032006, 5.68829457469, 42.00018984371],
    [0.00000038436, 5.02591476913, 5.92107588581],
    [0.0000003888, 1.723015663, 76.55807286891],
    [0.0000004119, 3.00922391966, 563.87503252191],
    [0.00000029786, 2.57644898724, 77.5067265004],
    [0.00000040604, 6.04591617823, 292.9446859525],
    [0.00000035275, 3.24596926614, 304.84171947829],
    [0.00000038242, 1.23011716621, 17.76992530181],
    [0.00000034445, 6.05203741506, 319.06881347989],
    [0.00000028725, 0.80354919578, 67.6366824041],
    [0.00000032809, 0.86662032393, 91.54262404029],
    [0.0000003888, 5.27893548994, 76.4617046493],
    [0.00000030731, 3.65388358465, 67.60305250931],
    [0.00000028459, 4.82537806886, 43.0427195673],
    [0.00000035368, 5.14016182775, 313.43973918739],
    [0.00000035703, 4.78026134196, 258.26823069831],
    [0.00000032317, 0.72991843715, 78.9575693139],
    [0.00000029243, 5.01962947605, 61.01077037031],
    [0.00000026235, 2.30979326374, 137.2768416459],
    [0.00000026519, 4.63187110201, 57.4993082325],
    [0.00000024931, 1.0244943612, 42.997027585],
    [0.00000027608, 0.68443037331, 103.7639804718],
    [0.0000002868, 6.22569747241, 215.1941419686],
    [0.00000025052, 0.98956881727, 350.08830211689],
    [0.00000031386, 2.53676810018, 22.22334342671],
    [0.00000027545, 6.02026727313, 100.6282787164],
    [0.00000022617, 1.89172143755, 36.8441963032],
    [0.00000024909, 4.9208991531, 24.36220744081],
    [0.00000026216, 3.37729185316, 491.8017469403],
    [0.0000002804, 1.26215532584, 11.55015017831],
    [0.00000023047, 2.67490790904, 35.51978228931],
    [0.00000027067, 5.52626880418, 326.62430346539],
    [0.00000026192, 0.78880180701, 20.7388707184],
    [0.00000023134, 1.02405904726, 68.4331339118],
    [0.00000021423, 5.59061648293, 39.90950993941],
    [0.00000025696, 5.03652999676, 186.4555775476],
    [0.00000026985, 1.96185307311, 69.6087900794],
    [0.00000023284, 1.14508397457, 79.43065006591],
    [0.00000022894, 5.33085965806, 227.77000692311],
    [0.00000022482, 5.43588494929, 39.8131417198],
    [0.0000002348, 5.96723336237, 30.9881194746],
    [0.00000020858, 1.66497796416, 41.2339239533],
    [0.00000020327, 5.86806874135, 39.0312444271],
    [0.00000020327, 4.75570383217, 37.72246181551],
    [0.00000022639, 1.78594954268, 0.9800227939],
    [0.00000022639, 4.92754219627, 1.46765776091],
    [0.00000019139, 1.60585998738, 205.9417309537],
    [0.00000019118, 0.0548523531, 2119.00767786191],
    [0.00000025698, 4.54722652155, 401.4059020327],
    [0.00000021582, 5.86612346662, 81.13006322279],
    [0.00000025509, 6.2190919179, 329.593248882],
    [0.00000024296, 3.68761645751, 62.0076081116],
    [0.00000023969, 2.45967218561, 135.3047339706],
    [0.00000020599, 6.0902572381, 491.3141119733],
    [0.00000016829, 4.06509805545, 3.1645787903],
    [0.0000002003, 2.45066995549, 217.4750661846],
    [0.00000020377, 5.6061724449, 209.6107596584],
    [0.00000017251, 1.00239992257, 350.5759370839],
    [0.00000019625, 1.41143867859, 129.6756596781],
    [0.00000022707, 0.97867191772, 1436.2969352491],
    [0.00000017142, 4.71740830608, 29.4700168715],
    [0.00000016188, 3.33781568208, 39.00999256771],
    [0.00000016188, 1.00277158426, 37.7437136749],
    [0.00000020858, 3.10425391408, 58.9837809408],
    [0.00000015747, 0.31821188942, 154.260432743],
    [0.00000019714, 5.04477015525, 294.91679362781],
    [0.00000019078, 1.16675280621, 202.4972126576],
    [0.0000002153, 4.9507588236, 114.1552894299],
    [0.00000019068, 3.39813326972, 138.2736793872],
    [0.00000018723, 4.64325038338, 323.74923414091],
    [0.00000018916, 3.89922448206, 40.3825906914],
    [0.00000015843, 4.98899291519, 72.577735496],
    [0.00000020695, 3.75000782446, 86.07111631471],
    [0.00000015895, 4.16120885988, 736.1203310153],
    [0.00000014983, 0.56469438588, 743.23387801611],
    [0.00000014928, 5.49703861671, 34.23225153711],
    [0.00000015461, 4.47518787654, 20.850745303],
    [0.00000016206, 4.48895168117, 138.76131435421],
    [0.00000015978, 5.56972981392, 515.70768857651],
    [0.00000014173, 1.42508198977, 99.1438060081],
    [0.00000018749, 1.80466304752, 54.5303628159],
    [0.00000013971, 3.54176522468, 76.77052119001],
    [0.00000013971, 3.46018552739, 76.2492563282],
    [0.00000014035, 6.02847994013, 235.68919520349],
    [0.00000018894, 3.02786191873, 31.4757544416],
    [0.00000014967, 5.68342907224, 52.3914988018],
    [0.00000017392, 0.12268817693, 74.0622082043],
    [0.00000014788, 3.43864596335, 56.01483552421],
    [0.00000015758, 1.26184897401, 208.8624922605],
    [0.00000012911, 5.12673395733, 42.5214547055],
    [0.00000014356, 0.18539168671, 251.8427048981],
    [0.00000016266, 3.39270678896, 853.4401992355],
    [0.00000015513, 2.59603540214, 59.038662695],
    [0.00000012783, 0.77187700977, 107.52937739611],
    [0.00000016075, 0.02096626523, 366.24181181149],
    [0.00000014277, 3.31408666848, 19.36627259471],
    [0.00000014742, 6.26354356543, 82.4477795923],
    [0.00000015111, 5.70708654477, 363.27286639489],
    [0.00000014981, 1.1711916498, 82.6145359311],
    [0.0000001484, 5.34075197148, 44.0541115236],
    [0.00000015592, 5.74434423333, 8.6293888715],
    [0.00000014568, 0.45025790013, 73.80157577341],
    [0.00000012251, 5.90063123167, 47.28368937111],
    [0.00000011447, 5.6261316477, 175.40987728371],
    [0.000000139, 0.93353054847, 700.4204217173],
    [0.00000015583, 5.46046493452, 837.4534458797],
    [0.00000012109, 0.53062884942, 33.0084112597],
    [0.00000012379, 0.8777801832, 140.4125434013],
    [0.00000011481, 3.6559100567, 39.2069345238],
    [0.00000011481, 0.68467720964, 37.54677171881],
    [0.00000011452, 5.92350892067, 529.4135177163],
    [0.00000010981, 1.58931744102, 63.49208081989],
    [0.00000012137, 0.75938098769, 42.3090063844],
    [0.00000013771, 2.92318261793, 76.62176334371],
    [0.00000011036, 1.59378256377, 530.45604743991],
    [0.00000011537, 2.72370023352, 199.3158189199],
    [0.00000011189, 1.67388131435, 80.1332254815],
    [0.00000012835, 2.83910944143, 38.85242600079],
    [0.00000012879, 0.0316178796, 5.69407334969],
    [0.00000013663, 4.69897705757, 438.0544649622],
    [0.00000010132, 2.80479631986, 187.9400502559],
    [0.00000012619, 3.09097380707, 65.2035560643],
    [0.00000010088, 1.41143864412, 26.58288545949],
    [0.00000011959, 1.19714206196, 64.7159210973],
    [0.00000011578, 5.81790016857, 275.3067035496],
    [0.00000012795, 1.66756565053, 17.8817998864],
    [0.00000013771, 4.07876849292, 76.3980141745],
    [0.00000010044, 1.67224715151, 147.83490694279],
    [0.00000013632, 1.29603813384, 45.277951801],
    [0.0000001166, 4.2288087172, 143.9027536797],
    [0.00000009938, 5.79050109, 6.86972951729],
    [0.00000009719, 4.48706829937, 956.53297345411],
    [0.00000011441, 5.32553485636, 533.8669358412],
    [0.0000001024, 1.34767099242, 80.7026744531],
    [0.00000010031, 3.80995841826, 43.74529498291],
    [0.00000010063, 1.05825122331, 0.27744737829],
    [0.00000011428, 2.19933512981, 526.00262931501],
    [0.00000009279, 1.45482205447, 79.6455905145],
    [0.00000010172, 0.89461094062, 568.0678182159],
    [0.00000009198, 0.3652053935, 112.6708167216],
    [0.00000009831, 4.06082180622, 20.9056270572],
    [0.0000000983, 1.9396088837, 544.1618765797],
    [0.00000008646, 6.06265529598, 30.7756711535],
    [0.00000009315, 1.72769398395, 65.63094483399],
    [0.00000009201, 1.6629909377, 184.48346987229],
    [0.00000008674, 3.58250353029, 624.1543504417],
    [0.00000010739, 5.20958133978, 331.56535655731],
    [0.00000009612, 3.81549627985, 182.00215942271],
    [0.00000008664, 4.05357381243, 1479.11039154791],
    [0.00000008092, 4.08843223898, 6.8360996225],
    [0.00000010092, 0.00357719036, 419.2408263917],
    [0.00000010233, 0.1699231098, 402.89037474099],
    [0.00000008502, 3.6064675326, 17.39416491939],
    [0.00000010189, 1.0190600406, 21.7020785649],
    [0.00000009829, 3.66564448678, 121.2352065359],
    [0.00000008406, 4.04270651029, 376.9150050599],
    [0.0000000806, 4.05224638436, 415.7963080956],
    [0.00000009455, 1.63876624122, 167.80869531589],
    [0.00000007941, 6.14526289331, 526.7533888404],
    [0.0000000787, 1.33260101318, 533.1161763158],
    [0.00000007695, 2.49810660877, 906.60597015449],
    [0.00000007862, 5.62722995177, 1265.81129610991],
    [0.00000008062, 5.84124471296, 105.7360881471],
    [0.00000008904, 5.87904582316, 399.9214293244],
    [0.0000000805, 4.85961454632, 143.8691237849],
    [0.00000009102, 3.20438608836, 348.17644063891],
    [0.00000007137, 5.97349520503, 117.5636857037],
    [0.00000007076, 4.77037120491, 26.84351789039],
    [0.00000008418, 6.19754313245, 77.73372903651],
    [0.00000008257, 6.01515603184, 117.77862615229],
    [0.00000007868, 0.36467826737, 288.4912678276],
    [0.00000008093, 5.12697881207, 1692.40948698591],
    [0.0000000691, 5.1602873072, 216.72430665921],
    [0.00000007092, 1.5841663496, 452.65981147369],
    [0.0000000706, 3.50187723218, 453.7023411973],
    [0.00000008233, 5.07959772857, 480.00777927849],
    [0.00000006772, 2.89170457209, 210.36151918381],
    [0.00000007025, 6.13907268455, 55.9029609396],
    [0.00000008356, 3.67079730328, 95.7354097343],
    [0.00000007404, 5.71532443096, 75.2860484817],
    [0.00000006839, 2.57023077532, 41.5125548767],
    [0.00000007909, 0.07288588503, 36.63174798211],
    [0.00000007909, 1.12610872772, 40.12195826051],
    [0.00000006362, 4.97586429633, 29.99128173331],
    [0.00000006712, 2.41218446093, 133.82026126229],
    [0.00000007571, 1.24658605384, 23.707816135],
    [0.00000006677, 4.81403056382, 1.20702533],
    [0.000000076, 1.64374414108, 494.2348732801],
    [0.00000008009, 1.96165940869, 170.72945662269],
    [0.00000007584, 1.33750538789, 119.2630988606],
    [0.00000006599, 0.68440943828, 32.226513967],
    [0.00000006085, 3.39985070945, 322.00412900171],
    [0.00000005953, 0.92774911672, 52214.1831362697],
    [0.00000007827, 4.85672910517, 474.7030278917],
    [0.00000007907, 6.03373097658, 485.63685357099],
    [0.00000007372, 3.31633214824, 55.05162767771],
    [0.00000006966, 4.03472609774, 647.25465079831],
    [0.00000006266, 1.06894881555, 177.0611063308],
    [0.000000059, 0.21363873876, 52061.16335875149],
    [0.00000006221, 0.78444326027, 602.00806815971],
    [0.00000005552, 4.30656362928, 223.1041404771],
    [0.00000005976, 3.40178743225, 10.8018827804],
    [0.000000076, 0.62565658069, 488.6057989876],
    [0.00000006831, 4.75854396498, 1582.2031657665],
    [0.00000005654, 1.46952482126, 12604.5285531041],
    [0.00000005798, 2.70754675899, 27.4979091962],
    [0.00000007216, 4.89431192173, 739.0410923221],
    [0.00000006579, 2.37730114095, 2.69149803831],
    [0.00000005758, 1.25264555408, 30.0394658431],
    [0.0000000527, 5.03822712313, 6166.94845288619],
    [0.00000007398, 2.15412967054, 709.721016842],
    [0.00000005679, 4.34696450423, 17.22740858061],
    [0.00000005205, 4.18097270804, 426.3543733925],
    [0.00000005146, 5.52411562781, 46.7624245093],
    [0.00000005694, 4.51992731423, 168.98435148349],
    [0.00000006627, 1.36429825841, 221.13203280179],
    [0.00000005443, 2.77787969707, 525.7419968841],
    [0.00000006475, 0.95284661304, 591.07424248041],
    [0.00000004984, 0.17849511014, 10097.15814910579],
    [0.00000005318, 3.65617684169, 44.52719227561],
    [0.00000006699, 1.37968332714, 2157.1407134997],
    [0.00000006443, 4.0798852425, 675.0445615878],
    [0.00000005078, 2.53592755854, 101.62511645769],
    [0.00000005394, 5.6018766025, 368.21391948681],
    [0.00000005072, 4.0967716329, 272.33775813299],
    [0.00000005208, 2.96070554414, 277.2788112249],
    [0.00000005332, 2.85701594895, 280.9357778421],
    [0.00000005989, 1.18032513011, 93.0270967486],
    [0.00000006329, 2.06650240521, 18.87863762769],
    [0.00000005551, 0.99966130596, 57.3874336479],
    [0.00000006471, 4.75702433578, 68.1243173711],
    [0.00000004708, 3.81000728156, 95.68722562449],
    [0.00000005891, 4.39361748912, 381.5954257209],
    [0.00000004717, 5.88762112195, 104.2852453336],
    [0.00000005675, 0.14149668499, 1165.6392831981],
    [0.00000005888, 2.00299136957, 42.34263627919],
    [0.00000005587, 2.52090459839, 459.6066021357],
    [0.00000005456, 3.07944464122, 75.50098893029],
    [0.0000000594, 4.70996040917, 6318.4837576961],
    [0.00000005207, 6.12213701959, 436.5699922539],
    [0.0000000616, 3.18966815531, 749.82616015511],
    [0.00000006137, 3.02268593798, 713.17759722561],
    [0.00000004547, 3.9629817996, 32.47259218289],
    [0.00000005246, 0.26649341993, 109.9625037359],
    [0.00000005244, 0.76595138199, 73.5891274523],
    [0.00000005572, 4.54958395511, 102.11275142471],
    [0.00000005638, 6.13292790226, 10248.6934539157],
    [0.00000004513, 0.05769066183, 1272.9248431107],
    [0.0000000434, 3.93529499489, 384.02855206069],
    [0.00000004263, 5.81710901839, 1577.52274510549],
    [0.00000005964, 3.35563503899, 786.47472308461],
    [0.00000004962, 1.38600480216, 257.78059573129],
    [0.00000005327, 4.13135597763, 107.74182571721],
    [0.00000005572, 5.58677005833, 291.2934569054],
    [0.00000004336, 1.08874295813, 53.40958840249],
    [0.00000004427, 1.43077618159, 189.42452296421],
    [0.00000004157, 5.03727532307, 29.5036467663],
    [0.00000004646, 4.44853801893, 13285.93981804009],
    [0.00000005507, 2.70385106164, 178.11819026941],
    [0.00000005348, 6.1370719103, 24.88347230261],
    [0.00000005339, 5.48920294964, 314.6635794648],
    [0.00000004678, 6.00688425085, 1474.4299708869],
    [0.0000000409, 4.92713296866, 765.3801602981],
    [0.00000005008, 4.28621887979, 352.06040979221],
    [0.00000005562, 5.12126233744, 6248.1555772537],
    [0.00000004983, 1.59156517574, 1055.43296197871],
    [0.00000004566, 0.54461731254, 325.1398307571],
    [0.00000005327, 0.54108371123, 439.53893767049],
    [0.00000005121, 4.27746071897, 711.6931245173],
    [0.00000004181, 2.68829223641, 6606.1994373488],
    [0.00000004293, 3.08794166207, 46.71424039951],
    [0.00000005532, 2.1055940746, 320.03202132639],
    [0.00000004492, 4.81151725335, 52177.53457334019],
    [0.00000004312, 6.10122311855, 22.8777347325],
    [0.00000005332, 0.25990559894, 10178.3652734733],
    [0.00000004593, 4.86059649, 1025.6854977289],
    [0.00000005439, 3.5236794754, 823.12328601411],
    [0.0000000387, 2.70915745235, 1596.43025976811],
    [0.00000003892, 0.54485159298, 226.07308589371],
    [0.00000004891, 4.37893659385, 8.1417539045],
    [0.00000004689, 5.09142557332, 276.79117625789],
    [0.00000004268, 1.02189794794, 374.15181032],
    [0.00000003828, 3.85156237339, 2138.2331988371],
    [0.00000004592, 2.30447944615, 1376.0176173293],
    [0.00000004629, 5.68948058955, 122.71967924421],
    [0.00000003871, 1.60468692916, 531.4192552864],
    [0.00000004995, 5.03302660981, 32.69959471901],
    [0.00000004711, 5.14987215661, 52252.31617190749],
    [0.00000003893, 1.6955496679, 116.294153444],
    [0.00000004481, 3.0940020914, 53.0458901076],
    [0.00000004136, 1.02307294098, 503.1080796351],
    [0.00000004508, 2.81495366139, 562.12992738271],
    [0.00000005025, 1.96944866339, 283.38345839689],
    [0.00000004789, 1.11612617111, 627.7228054099],
    [0.00000004021, 1.71534059601, 6603.23049193219],
    [0.00000005163, 0.06221778581, 25519.83532335829],
    [0.0000000415, 2.29239909221, 27.443027442],
    [0.00000003623, 0.72377687032, 1665.5827840429],
    [0.00000004634, 3.36220803589, 3227.45397501119],
    [0.0000000406, 4.64578985602, 304.4780211834],
    [0.00000003862, 5.22051626712, 74.504151189],
    [0.00000003561, 3.3589159208, 358.6526919312],
    [0.00000004557, 1.56282166634, 25974.74468988559],
    [0.00000004264, 3.13963744879, 634.93941827469],
    [0.00000004482, 0.13471172639, 342.61105682121],
    [0.00000003539, 5.28146842802, 119.7507338276],
    [0.00000004304, 5.35023544496, 12567.8799901746],
    [0.00000004138, 5.60646772527, 107.2541907502],
    [0.00000004284, 1.62500514182, 294.42915866079],
    [0.00000003723, 0.87405503812, 987.325459555],
    [0.00000003723, 4.01564769171, 987.813094522],
    [0.00000004606, 0.78314632413, 14.42521950279],
    [0.00000004236, 1.51001695106, 155.9116617901],
    [0.00000004458, 1.07510939804, 395.8225197225],
    [0.00000004798, 3.66850235979, 530.195415009],
    [0.0000000364, 3.79814548576, 2564.8313897131],
    [0.00000003563, 0.66220700888, 12451.50877558589],
    [0.00000003443, 3.70889407011, 245.2504227591],
    [0.00000003429, 3.16343780315, 530.0466571627],
    [0.00000003872, 5.66297097129, 308.98632106249],
    [0.00000003406, 4.319002321, 529.82290799351],
    [0.00000004348, 3.09499292675, 20311.92816802509],
    [0.00000004589, 3.67073392808, 181.08713568601],
    [0.00000003854, 4.35430550499, 12564.91104475801],
    [0.00000003789, 5.86431526205, 3101.6359018085],
    [0.00000003783, 1.84016316657, 1614.17130803499],
    [0.00000003904, 1.57500723101, 369.8014580591],
    [0.00000003765, 3.13810202386, 1025.94613015981],
    [0.00000004231, 3.7883466484, 31.52393855141],
    [0.00000004303, 3.40265517593, 396.785727569],
    [0.00000004085, 0.23841437878, 14.47091148511],
    [0.00000004085, 3.38000703237, 13.9832765181],
    [0.00000003346, 0.20283168925, 20351.54567637119],
    [0.00000004021, 4.51457854549, 748.3416874468],
    [0.00000003753, 2.74283876055, 524.99372948619],
    [0.00000003935, 2.81201754924, 1617.14025345159],
    [0.00000004432, 5.02857999493, 511.3515908212],
    [0.0000000417, 2.85784811733, 274.87931477991],
    [0.00000003317, 3.36427187559, 266.70868384049],
    [0.00000004545, 2.99451528962, 244.5624015585],
    [0.00000003589, 6.26623778468, 59.526297662],
    [0.00000003464, 1.94815791367, 102.27950776349],
    [0.00000004526, 2.98322850842, 525.7901809939],
    [0.00000004603, 2.83181132811, 26088.1469590577],
    [0.00000004021, 3.8150222117, 52174.56562792359],
    [0.00000003276, 3.52742657818, 1306.3774580875],
    [0.00000003214, 5.51315121035, 20348.57673095459],
    [0.00000003706, 3.68281338464, 27.07052042651],
    [0.00000003759, 5.89324799399, 164.83974989929],
    [0.00000003184, 0.4457467717, 538.0115374254],
    [0.0000000443, 3.80837870078, 529.6741501472],
    [0.00000004064, 2.60402368915, 6130.2998899567],
    [0.00000003918, 5.77655218093, 375.43053235159],
    [0.00000004058, 3.56233663362, 433.4342904985],
    [0.00000003919, 1.93774102166, 1092.8177302186],
    [0.00000003919, 5.07933367525, 1093.3053651856],
    [0.00000003175, 2.71648311, 241.3664536058],
    [0.00000003135, 1.09798751738, 127.22797912329],
    [0.00000003834, 3.42021462454, 14.3133449182],
    [0.00000004022, 0.15000192924, 1477.8383671607],
    [0.00000003221, 2.66340709341, 78.1611178062],
    [0.00000003426, 4.77405099085, 519.8522901607],
    [0.00000004369, 2.32053270413, 746.3695797715],
    [0.0000000316, 3.58900877772, 664.99569906519],
    [0.0000000406, 4.4900808385, 51.87023394],
    [0.00000003107, 3.81160836398, 28.9275001503],
    [0.00000003259, 0.91022076156, 657.8821520644],
    [0.00000003428, 2.81213415208, 2351.5322942751],
    [0.00000003235, 0.07612839981, 406.3469551246],
    [0.00000003161, 0.98519827646, 982.8720414301],
    [0.00000004351, 2.61742468676, 20388.19423930069],
    [0.00000003384, 1.87729416709, 660.851097481],
    [0.00000003452, 5.96738985165, 326.1823604807],
    [0.00000003298, 1.72568702486, 1403.84115801359],
    [0.00000003278, 5.2602541361, 941.7700603757],
    [0.00000003723, 0.29723150363, 451.9572360581],
    [0.00000003173, 0.7540188548, 1400.87221259699],
    [0.00000004113, 3.4451884663, 1049.31625271919],
    [0.00000004012, 0.58002417229, 52.6039471229],
    [0.00000004142, 0.18543891861, 978.6792557361],
    [0.00000004295, 2.94382365877, 875.58648151749],
    [0.00000003224, 5.3907492015, 459.1189671687],
    [0.00000003151, 2.11925788926, 381.8560581518],
    [0.00000003633, 6.0979862269, 256.78375799],
    [0.0000000425, 4.81834414256, 528.71094230071],
    [0.00000004186, 3.66267284521, 943.25453308399],
    [0.00000003406, 1.82206499429, 170.46882419179],
    [0.00000003231, 6.18447276533, 400.8209466961],
    [0.00000003726, 5.26557613435, 1096.48675892331],
    [0.00000003792, 5.46702979448, 111.9346114112],
    [0.00000003651, 6.140129743, 154.42718908179],
    [0.00000003839, 4.02729058795, 10060.50958617629],
    [0.00000003356, 5.3378502358, 1586.34776735071],
    [0.00000003219, 1.26547692662, 213.7096692603],
    [0.00000003671, 3.08823320781, 57.6023740965],
    [0.00000004187, 1.86321883254, 2772.54460848389],
    [0.0000000296, 3.77221652347, 2461.7386154945],
    [0.00000003331, 2.3836128863, 10133.80671203529],
    [0.00000003341, 2.74911210318, 243.7659500508],
    [0.00000003466, 0.02652921265, 1150.92455422949],
    [0.00000003296, 5.06897390591, 1653.78881638109],
    [0.00000003014, 3.4717184935, 1477.3989163035],
    [0.00000004118, 1.26070911091, 25596.5890296009],
    [0.00000002951, 3.47218747597, 42.78208713641],
    [0.00000002951, 4.00999244396, 33.9716191062],
    [0.0000000383, 3.02640541849, 323.48860171],
    [0.00000003313, 3.21919687279, 939.1099314998],
    [0.00000003031, 4.32205791511, 156450.9089606861],
    [0.00000003606, 2.35740018537, 1082.2596649217],
    [0.00000002967, 4.72619454182, 6.3941566378],
    [0.00000002995, 5.12808890644, 139.7099679857],
    [0.00000003251, 1.93107151339, 709.29362807231],
    [0.0000000348, 2.18796105799, 518.1408149163],
    [0.00000003906, 4.41951013162, 1119.90506559249],
    [0.00000003406, 3.42602191152, 148.79811478929],
    [0.00000003359, 0.17159576955, 642.8494167832],
    [0.00000003027, 5.00980281133, 184.0078969928],
    [0.00000002918, 0.68786396977, 83.6234357599],
    [0.00000003347, 4.53587187847, 217.68751450571],
    [0.00000003277, 1.84412902317, 912.5438609877],
    [0.00000003277, 4.98572167676, 913.03149595471],
    [0.00000003196, 4.27207353253, 363.1061100561],
    [0.00000002869, 2.93254803921, 285.35556607221],
    [0.00000003158, 5.8939185508, 540.01727499551],
    [0.0000000281, 3.57723287116, 1592.2856581839],
    [0.00000003471, 4.56081319778, 144.39038864671],
    [0.00000003159, 5.71530971815, 197.5561595657],
    [0.00000003227, 1.02602355265, 6203.5970158157],
    [0.0000000375, 1.09900342443, 303.35724676999],
    [0.00000003848, 4.95190461444, 26048.04181574459],
    [0.00000002741, 0.13004673727, 70.8326303568],
    [0.00000002826, 3.64821843137, 460.2946233363],
    [0.00000002748, 5.6961726874, 600.52359545141],
    [0.00000003057, 4.56550138397, 23.81969071961],
    [0.00000003057, 6.05827118955, 52.934015523],
    [0.00000003446, 1.9696701347, 500.1391342185],
    [0.00000002703, 6.2627226586, 908.0904428628],
    [0.00000002817, 1.69638906604, 210.6221516147],
    [0.00000002848, 1.16888883373, 450.4727633498],
    [0.00000002724, 5.64910484087, 23.18655127321],
    [0.00000002905, 1.13800629851, 149.3193796511],
    [0.00000002848, 1.48842245891, 622.66987773339],
    [0.00000002733, 1.93636126616, 262.72164882321],
    [0.00000002863, 2.26914213515, 175.57663362249],
    [0.00000002681, 5.83048409789, 25.1922888433],
    [0.00000002822, 0.00883588585, 259.7527034066],
    [0.00000003174, 1.47302873031, 347.1193567003],
    [0.00000003271, 2.97328046332, 458.5977023069],
    [0.00000002894, 5.75207939107, 71.82946809809],
    [0.0000000349, 1.28003658954, 664.3713683394],
    [0.00000003506, 3.91611653269, 771.3481117113],
    [0.00000003326, 0.55224065588, 45.2297676912],
    [0.00000002988, 4.9456370523, 299.37021175271],
    [0.00000002916, 5.17859920603, 6642.8480002783],
    [0.00000002916, 5.17859920603, 6643.3356352453],
    [0.0000000263, 5.83933407803, 2751.79141717511],
    [0.00000002903, 5.88134941337, 477.08701797169],
    [0.00000002804, 4.97695491059, 6681.46867088311],
    [0.00000002622, 0.73099530901, 521.8580277308],
    [0.00000002606, 1.44468831628, 410.8552550037],
    [0.00000003046, 0.79307135358, 959.45373476091],
    [0.00000003127, 1.47432830628, 225.5518210319],
    [0.000000027, 2.88388264285, 963.6465204549],
    [0.00000002778, 3.22939757518, 238.39750818919],
    [0.00000003029, 0.01392036536, 473.2185551834],
    [0.00000002671, 3.02950363348, 531.9405201482],
    [0.00000002914, 2.29089443923, 554.31380496631],
    [0.00000003087, 1.37613019083, 340.2664421304],
    [0.00000003438, 3.89546045811, 6171.40187101109],
    [0.00000002879, 4.04729837696, 218.6507223522],
    [0.0000000314, 3.44921752602, 609.1216151605],
    [0.00000003003, 5.24831469226, 464.97504399731],
    [0.00000003257, 6.23715182295, 305.96249389171],
    [0.00000003211, 0.9359414921, 416.532513406],
    [0.00000003265, 6.26189223545, 24.7347144563],
    [0.00000002644, 5.73202797797, 508.5941415757],
    [0.00000002764, 0.26986971158, 410.59462257279],
    [0.00000003428, 0.9984966575, 1012.6195056799],
    [0.00000002614, 2.50560328703, 213.5910970313],
    [0.00000003469, 3.71563719744, 24.14975911971],
    [0.00000002606, 5.52398994555, 213.4947288117],
    [0.00000003444, 0.99352524535, 891.57323487331],
    [0.0000000254, 5.89247404448, 564.8718702632],
    [0.0000000254, 2.75088139089, 565.35950523021],
    [0.00000002754, 4.26615188091, 57.5541899867],
    [0.00000002531, 2.16100356086, 800.5924346291],
    [0.00000002557, 2.24078889519, 341.49028240779],
    [0.00000002601, 2.97805958626, 261.2371761149],
    [0.00000003027, 1.77262933089, 331.07772159029],
    [0.00000002494, 5.29381091116, 203.9816853659],
    [0.0000000259, 3.33405614398, 1190.5420625756],
    [0.00000003494, 1.33796606005, 534.0793841623],
    [0.00000003144, 1.59061342897, 1503.9649868156],
    [0.00000002818, 2.04818816564, 49.31067880061],
    [0.00000002791, 2.91527039269, 288.32451148881],
    [0.00000002471, 2.80089246981, 411.11588743459],
    [0.00000003059, 1.73898053758, 172.48911597691],
    [0.00000002972, 5.01468129705, 569.29165849331],
    [0.00000003418, 3.83213917567, 638.3959986583],
    [0.00000002541, 3.41936535077, 1448.09090291091],
    [0.00000002663, 5.1439072406, 573.6968925084],
    [0.00000002439, 2.82552552997, 1625.9652756968],
    [0.00000002739, 1.01296407856, 112.8832650427],
    [0.00000002821, 4.09784112299, 402.93606672331],
    [0.00000003412, 5.98246878418, 772.8325844196],
    [0.00000002624, 4.2844921981, 1624.4808029885],
    [0.0000000317, 2.10762429629, 1011.13503297159],
    [0.00000002908, 3.03870325402, 635.94831810351],
    [0.00000002664, 4.25083112029, 409.41896640519],
    [0.00000003091, 0.31165645931, 379.25961975071],
    [0.00000003301, 3.48430565498, 19.7936613644],
    [0.00000003176, 4.86809762289, 300.9095662152],
    [0.00000003022, 4.37742921398, 52.0189917863],
    [0.0000000289, 6.24788645936, 293.4323209195],
    [0.00000002698, 3.26450368524, 78149.06650032569],
    [0.00000002558, 2.31657732137, 1371.3371966683],
    [0.00000002619, 5.37658613752, 202.0095776906],
    [0.00000003176, 5.32134696018, 10101.61156723069],
    [0.00000003341, 3.91159951862, 345.8955164229],
    [0.00000002373, 0.2523681357, 130.8513158457],
    [0.00000002644, 4.25178872695, 305.10235190919],
    [0.00000003339, 3.06224357085, 2849.2983147265],
    [0.0000000241, 3.15243245459, 951.8525527931],
    [0.00000003303, 3.82850925169, 769.5729459921],
    [0.00000003302, 3.28815049288, 90.1520274241],
    [0.00000002416, 4.43555947495, 527.929045008],
    [0.00000002361, 0.63550285699, 905.1214974462],
    [0.00000002737, 3.20111311776, 1206.2199993907],
    [0.00000002441, 5.40055208431, 246.73489546739],
    [0.00000002441, 5.40055208431, 247.2225304344],
    [0.00000002957, 2.68753178821, 238.23075185041],
    [0.00000003263, 2.55710522617, 1506.93393223219],
    [0.00000003293, 1.22031676357, 66.1522096958],
    [0.00000003241, 5.00885682863, 978.4186233052],
    [0.00000003149, 2.0789223437, 271.9103693633],
    [0.00000003149, 5.22051499729, 271.4227343963],
    [0.00000002328, 0.36371018198, 31.738879],
    [0.00000002372, 2.2573170742, 309.0345051723],
    [0.00000002372, 2.2573170742, 309.5221401393],
    [0.00000002369, 5.90092450419, 418.9801939608],
    [0.00000003007, 6.21088893213, 1437.7814079574],
    [0.00000003034, 4.41266493573, 330.8627811417],
    [0.00000002345, 4.37756786631, 453.9318358609],
    [0.00000003118, 5.30478414038, 1434.81246254079],
    [0.00000002324, 5.43011369487, 495.2462652364],
    [0.0000000234, 0.707535729, 452.43031681009],
    [0.00000002336, 1.6173546592, 189.591279303],
    [0.0000000292, 2.21678930184, 1549.69920442121],
    [0.00000002494, 2.36432658211, 1187.57311715899],
    [0.00000002692, 5.74887255496, 425.13053311509],
    [0.00000002874, 3.06187769177, 1654.2764513481],
    [0.00000002809, 0.95838272583, 317.5843407716],
    [0.00000002735, 2.3691057154, 1513.05064149171],
    [0.00000002949, 4.69913732218, 186.71620997851],
    [0.0000000232, 2.31406529898, 487.38195871019],
    [0.00000003113, 4.63822476931, 353.28425006961],
    [0.00000003086, 3.30396670519, 1230.5990217789],
    [0.00000002722, 0.59415160235, 49.6831858161],
    [0.00000003064, 2.11685584705, 133.13224006171],
    [0.00000003064, 5.25844850064, 132.64460509469],
    [0.0000000247, 1.21163683322, 532.3824631329],
    [0.0000000264, 5.23029870928, 394.33804701421],
    [0.00000002252, 3.41692637069, 22.6507321964],
    [0.00000003151, 3.68959728933, 859.77184894361],
    [0.00000002671, 2.49225273236, 37.3679532925],
    [0.0000000238, 2.43767088034, 429.2751346993],
    [0.00000002655, 4.29167785274, 484.1523808627],
    [0.00000003005, 4.59447567553, 1929.33933741419],
    [0.0000000255, 0.89259009595, 496.9431862658],
    [0.0000000229, 4.98199823333, 455.18681390559],
    [0.00000002608, 2.28446271246, 422.9580392062],
    [0.00000002226, 0.52897898579, 47.82620609231],
    [0.00000002233, 3.3694924011, 877.3461408717],
    [0.00000002764, 2.40581332791, 356.68058425589],
    [0.00000002719, 3.56033366747, 177.5823711926],
    [0.00000002999, 3.63965245652, 1926.37039199759],
    [0.00000002693, 2.00893145868, 6284.8041401832],
    [0.00000002369, 5.90816921383, 70.88081446661],
    [0.00000002498, 2.14771583991, 315.1512144318],
    [0.00000002204, 4.77545839271, 442.886135597],
    [0.00000002261, 4.89614385698, 621.2335891349],
    [0.00000002213, 1.4502493863, 1189.0575898673],
    [0.00000002492, 4.24445703283, 406.9712858504],
    [0.00000002976, 3.02481916981, 1014.1039783882],
    [0.0000000284, 0.64471611311, 522.3336006103],
    [0.0000000234, 3.2952825931, 440.43845504219],
    [0.00000003012, 2.70591736862, 15.9096922111],
    [0.00000003012, 2.70591736862, 16.3973271781],
    [0.00000002372, 1.81307027955, 132.5964209849],
    [0.00000002232, 3.99248125271, 158.12984768129],
    [0.00000002961, 5.94214048852, 286.3524038135],
    [0.00000002961, 2.80054783493, 286.8400387805],
];

const Y1: &[Term] = &[
    [0.00357822049, 3.03457804662, 0.2438174835],
    [0.00256200629, 0.44613631554, 36.892380413],
    [0.00242677799, 3.89213848413, 39.86132582961],
    [0.00106073143, 4.64936068389, 37.88921815429],
    [0.00103735195, 4.51191141127, 38.3768531213],
    [0.00118508231, 1.31543504055, 76.50988875911],
    [0.00021930692, 1.6293993637, 35.40790770471],
    [0.00017445772, 2.69316438174, 41.3457985379],
    [0.00013038843, 3.79605108858, 3.21276290011],
    [0.00004928885, 0.5181357149, 73.5409433425],
    [0.00002742686, 2.49310000815, 77.9943614674],
    [0.00002155134, 2.5480143575, 4.6972356084],
    [0.000018828, 2.84958651579, 33.9234349964],
    [0.00001572888, 5.79049449823, 114.6429243969],
    [0.00001326507, 4.45906236203, 75.0254160508],
    [0.00001343094, 1.46758582116, 42.83027124621],
    [0.00000897979, 2.69913392072, 426.8420083595],
    [0.00000865617, 0.09538823497, 37.8555882595],
    [0.00000849963, 4.24519902715, 38.89811798311],
    [0.00000922754, 1.77437053635, 72.05647063421],
    [0.00000726258, 5.81913445111, 36.404745446],
    [0.0000077822, 4.27400223412, 206.42936592071],
    [0.00000754025, 3.76126183394, 220.6564599223],
    [0.00000607406, 4.81815513635, 1059.6257476727],
    [0.00000571831, 0.85851242227, 522.8212355773],
    [0.00000560995, 0.34476353479, 537.0483295789],
    [0.00000501078, 0.14255476727, 28.81562556571],
    [0.00000493238, 0.53463363296, 39.3736908626],
    [0.00000474802, 5.97795229031, 98.6561710411],
    [0.00000453975, 0.14363576661, 35.9291725665],
    [0.00000471731, 3.27137539235, 1.7282901918],
    [0.00000410057, 4.19500321025, 40.8245336761],
    [0.00000366899, 4.1967594025, 47.9380806769],
    [0.00000450109, 2.8275008423, 76.0222537921],
    [0.00000354347, 1.55870450456, 1.24065522479],
    [0.00000300159, 1.31608359577, 6.1817083167],
    [0.00000327501, 5.77559197316, 33.43580002939],
    [0.00000174973, 4.06947925642, 32.4389622881],
    [0.00000171503, 2.86905921629, 34.1840674273],
    [0.00000156749, 1.0246545173, 79.47883417571],
    [0.00000152549, 5.29458792782, 30.300098274],
    [0.00000150775, 1.46875297221, 42.5696388153],
    [0.0000016228, 5.51215947389, 31.2633061205],
    [0.00000131609, 3.19975255613, 7.83293736379],
    [0.00000136159, 3.00798814109, 70.5719979259],
    [0.00000134616, 5.10422989672, 45.49040012211],
    [0.00000116304, 5.3294949264, 46.4536079686],
    [0.00000115918, 0.24763705851, 44.31474395451],
    [0.00000110293, 4.69481457289, 35.4560918145],
    [0.00000099282, 0.34979488247, 2.7251279331],
    [0.00000099914, 5.92865840649, 41.2976144281],
    [0.00000108706, 1.52062460635, 113.15845168861],
    [0.00000088965, 5.83760483379, 60.52313540329],
    [0.00000086886, 0.75633169755, 31.9513273211],
    [0.00000072232, 1.93507773057, 640.1411037975],
    [0.00000086985, 3.23018942725, 419.72846135871],
    [0.0000007343, 5.93590859407, 70.08436295889],
    [0.00000053395, 2.89441175199, 433.9555553603],
    [0.00000057451, 5.79242631159, 213.5429129215],
    [0.00000051458, 2.44646741842, 69.3963417583],
    [0.00000048797, 4.44285537763, 111.67397898031],
    [0.00000048557, 1.53569583062, 2.6769438233],
    [0.00000042206, 4.80902694866, 74.53778108379],
    [0.0000004255, 0.10167685669, 7.66618102501],
    [0.00000039462, 4.26971409186, 31.7845709823],
    [0.00000039445, 5.65869884949, 12.77399045571],
    [0.00000042389, 4.01940273222, 110.189506272],
    [0.00000044118, 5.15854031484, 1589.3167127673],
    [0.00000037988, 4.30930512095, 6.3484646555],
    [0.00000037802, 4.41701497532, 14.258463164],
    [0.0000003628, 1.56655638104, 273.8222308413],
    [0.00000037247, 6.20048406786, 73.0533083755],
    [0.00000036282, 1.28256818253, 84.5866436064],
    [0.00000040018, 2.70338838405, 4.4366031775],
    [0.000000324, 0.07249247133, 44.96913526031],
    [0.00000031842, 0.45413330049, 34.9202727377],
    [0.00000032037, 1.37472212177, 27.3311528574],
    [0.00000034456, 1.8007296668, 529.9347825781],
    [0.00000031208, 0.16340478702, 1052.51220067191],
    [0.00000030002, 0.76559925402, 1066.7392946735],
    [0.00000033805, 4.47034863791, 149.8070146181],
    [0.00000033096, 0.88714456679, 116.12739710521],
    [0.00000030571, 5.59230793843, 22.3900997655],
    [0.0000002402, 4.95060362012, 63.9797157869],
    [0.0000002378, 5.91699417045, 105.76971804189],
    [0.0000002311, 4.08428537053, 23.87457247379],
    [0.00000022233, 2.7866241003, 174.9222423167],
    [0.00000021377, 2.17060095397, 316.6356871401],
    [0.000000254, 6.09781709877, 106.73292588839],
    [0.00000020754, 5.6571272615, 5.6604434549],
    [0.00000025572, 0.74829738831, 529.44714761109],
    [0.00000019878, 5.73044838456, 32.9602271499],
    [0.00000019754, 2.91920492275, 49.42255338521],
    [0.00000019241, 4.44333892046, 7.14491616321],
    [0.00000017979, 6.19717030924, 62.4952430786],
    [0.00000019513, 0.93528726944, 68.5998902506],
    [0.00000018273, 3.63050723326, 227.77000692311],
    [0.00000017552, 4.23270606709, 69.0875252176],
    [0.00000016704, 5.51562885485, 40.8581635709],
    [0.00000016996, 2.67528896312, 91.54262404029],
    [0.000000168, 2.08712613778, 30.4668546128],
    [0.000000168, 5.22871879137, 30.95448957981],
    [0.000000164, 3.45346576095, 33.26904369061],
    [0.00000017242, 4.89590986485, 11.55015017831],
    [0.0000001559, 0.42181314281, 37.1048287341],
    [0.0000001559, 3.91877412353, 39.6488775085],
    [0.00000015469, 4.91170489358, 43.79347909271],
    [0.0000001659, 1.19757876004, 33.71098667531],
    [0.00000019347, 4.06418655235, 152.77596003471],
    [0.00000014994, 4.29075263091, 319.06881347989],
    [0.00000014395, 5.67189517492, 110.45013870291],
    [0.00000015528, 5.87587490674, 79.43065006591],
    [0.00000013727, 0.88731617093, 43.484662552],
    [0.00000013988, 5.54059308769, 4.2096006414],
    [0.00000014467, 5.13403607047, 108.70503356371],
    [0.00000016652, 4.74696813612, 304.84171947829],
    [0.00000015153, 1.64704158732, 72.31710306511],
    [0.0000001281, 0.80784638784, 11.2895177474],
    [0.00000012751, 5.32663860873, 45.7992166628],
    [0.00000013293, 3.14432194523, 43.0427195673],
    [0.00000012751, 0.98606109283, 515.70768857651],
    [0.00000011616, 4.07265201948, 97.17169833279],
    [0.00000011538, 4.63247506911, 633.0275567967],
    [0.00000011046, 5.97427560684, 25.8466801491],
    [0.00000011032, 5.39646944302, 4.8639919472],
    [0.00000011189, 2.37859784397, 83.1021708981],
    [0.0000001086, 5.09978655023, 9.8050450391],
    [0.00000010958, 3.05455531642, 415.04804069769],
    [0.00000010244, 4.97854342755, 71.09326278771],
    [0.00000011427, 3.07758676009, 129.6756596781],
    [0.00000009895, 4.05388510292, 251.6759485593],
    [0.00000009802, 3.40894474212, 44.48150029329],
    [0.00000011029, 6.26821027792, 143.38148881789],
    [0.00000009235, 4.42290386641, 199.3158189199],
    [0.00000008899, 1.97879285736, 7.3573644843],
    [0.00000007746, 4.32608949084, 103.3365917021],
    [0.00000008691, 2.29051174612, 32.7477788288],
    [0.00000007714, 3.51056446926, 65.46418849521],
    [0.00000008007, 0.23872922784, 544.1618765797],
    [0.00000007513, 6.18736050552, 69.6087900794],
    [0.00000007336, 3.43409422317, 15.7429358723],
    [0.00000007195, 4.56950200257, 949.4194264533],
    [0.00000009601, 5.68191403081, 80.963306884],
    [0.00000008094, 1.70304241092, 526.7533888404],
    [0.00000008109, 5.77532188995, 533.1161763158],
    [0.00000006906, 3.70672232078, 137.2768416459],
    [0.00000007455, 1.11362695292, 105.2484531801],
    [0.00000007826, 2.45321405406, 77.0311536209],
    [0.00000006529, 5.57837212493, 65.2035560643],
    [0.00000007134, 2.05010386093, 44.00592741381],
    [0.00000006186, 0.85023811841, 31.4757544416],
    [0.00000006186, 3.991830772, 30.9881194746],
    [0.00000007698, 4.89115030216, 14.47091148511],
    [0.00000007434, 3.96333556733, 146.8380692015],
    [0.00000006317, 5.24777799313, 66.9486612035],
    [0.00000006903, 4.63739310514, 75.98862389731],
    [0.00000005591, 3.47781120117, 448.98829064149],
    [0.00000006425, 3.47626562775, 678.27413943531],
    [0.00000005483, 1.61247704205, 34.44469985821],
    [0.00000005483, 2.72811022429, 42.3090063844],
    [0.00000005519, 1.27116075236, 853.4401992355],
    [0.00000005483, 5.10869779974, 100.14064374939],
    [0.00000005483, 1.96710514615, 100.6282787164],
    [0.00000006288, 2.60319684406, 143.9027536797],
    [0.00000006239, 4.2098707787, 17.76992530181],
    [0.00000005246, 3.5203533249, 209.6107596584],
    [0.00000005331, 4.83550697489, 45.9659730016],
    [0.00000005131, 4.53503564274, 217.4750661846],
    [0.00000005325, 2.82680123889, 19.2543980101],
    [0.00000005172, 2.44008575183, 25.3590451821],
    [0.00000005139, 4.17507085285, 6.86972951729],
    [0.00000005992, 2.7636755767, 9.3174100721],
    [0.00000005011, 4.91884286875, 38.85242600079],
    [0.00000004975, 3.01044533436, 525.2543619171],
    [0.0000000491, 3.47707407879, 45.277951801],
    [0.0000000525, 0.16559612363, 0.719390363],
    [0.00000004731, 6.2746930185, 40.3825906914],
    [0.00000004731, 1.20748690143, 36.3711155512],
    [0.0000000591, 1.4056608169, 6168.43292559449],
    [0.000000047, 4.66314397827, 50.9070260935],
    [0.00000005127, 1.64029328726, 140.9338082631],
    [0.00000005321, 2.09939112611, 1104.87233031131],
    [0.00000006339, 1.02786059939, 10175.3963280567],
    [0.00000004983, 1.46113982673, 1090.6452363097],
    [0.00000005487, 0.1397952198, 180.03005174739],
    [0.0000000456, 2.38015606975, 323.74923414091],
    [0.00000004689, 5.95510153546, 1068.22376738181],
    [0.00000005562, 2.83481631972, 10098.64262181409],
    [0.00000004432, 0.83559275468, 415.7963080956],
    [0.00000004456, 1.46246408589, 235.68919520349],
    [0.00000004289, 4.4044924684, 1051.0277279636],
    [0.00000004145, 4.70457869197, 33.6964324603],
    [0.00000004167, 3.29886964345, 416.532513406],
    [0.00000004107, 0.91956436736, 61.01077037031],
    [0.00000004088, 3.88660175347, 423.66061462181],
    [0.00000005027, 2.86873904525, 21.7020785649],
    [0.0000000403, 3.44189647415, 216.72430665921],
    [0.00000004278, 6.22413352457, 310.4707937708],
    [0.00000004013, 2.96769071148, 104275.10267753768],
    [0.00000004505, 5.9374616163, 291.9478482112],
    [0.00000003959, 4.6095497465, 210.36151918381],
    [0.00000003962, 5.59162611271, 978.93988816699],
    [0.00000005561, 3.31923216598, 1409.47023230609],
    [0.00000005073, 5.15285057233, 1498.3359125231],
    [0.00000004227, 6.19954210169, 534.38820070301],
    [0.00000004054, 2.45804475947, 430.02340209721],
    [0.00000003863, 0.6718439924, 1127.50624756031],
    [0.00000004367, 0.14073726901, 58.9837809408],
    [0.00000004694, 4.91041582057, 77.5067265004],
    [0.00000004144, 5.16137286617, 518.1408149163],
    [0.00000004289, 1.72696806473, 921.3206991231],
    [0.00000004039, 5.37067473153, 1622.76932774409],
    [0.0000000518, 3.80035699018, 99.1438060081],
    [0.00000004845, 1.33083083566, 136.78920667889],
    [0.00000004827, 1.21379713661, 418.2439886504],
    [0.00000003722, 4.94171351364, 1065.2548219652],
    [0.00000004729, 2.19682691364, 421.212934067],
    [0.0000000349, 0.5475644861, 986.8041946932],
    [0.00000003715, 1.30912268012, 254.10907489909],
    [0.00000003488, 5.95100195908, 187.9400502559],
    [0.00000003989, 5.37041318514, 95.7354097343],
    [0.00000003603, 2.22310220083, 67.1154175423],
    [0.0000000353, 0.9398617487, 24.36220744081],
    [0.00000003538, 1.51952328076, 57.4993082325],
    [0.00000003838, 3.56895316428, 979.90309601349],
    [0.00000003615, 1.60474010406, 493.2862196486],
    [0.00000003457, 1.79944886939, 807.70598162989],
    [0.00000003648, 1.43920595596, 647.25465079831],
    [0.00000004048, 6.25251011272, 979.69064769239],
    [0.00000004414, 2.00415973362, 1062.59469308931],
    [0.00000003631, 0.74841494891, 486.1726726478],
    [0.00000003347, 4.13560148025, 151.2914873264],
    [0.00000003305, 5.23397852699, 1544.07013012871],
    [0.00000003428, 0.11713176717, 107.2205608554],
    [0.00000003286, 3.55869926238, 1131.6990332543],
    [0.00000003389, 3.22644735392, 28.98238190449],
    [0.00000003353, 2.3030904887, 10289.7954349701],
    [0.00000003214, 0.83720162261, 569.5522909242],
    [0.0000000321, 1.05449812296, 114.1552894299],
    [0.00000003353, 1.62613341505, 157.8837694654],
    [0.00000003339, 5.26712406495, 443.0985839181],
    [0.00000003188, 2.62887165071, 361.13400238079],
    [0.0000000339, 5.53564544873, 1558.2972241303],
    [0.00000003933, 2.08622660372, 313.43973918739],
    [0.00000003131, 0.52572989907, 275.3067035496],
    [0.00000003156, 6.23565991208, 431.8404353331],
    [0.00000003993, 4.90080803105, 67.6366824041],
    [0.00000003708, 0.24836934654, 500.39976664941],
    [0.00000004051, 4.41826493037, 59.038662695],
    [0.00000003757, 2.02838234929, 296.4012663361],
    [0.00000003138, 0.6390696904, 347.1193567003],
    [0.00000003086, 1.67235466145, 392.9017584157],
    [0.00000003466, 1.60020779124, 215.1941419686],
    [0.00000003139, 3.09999506971, 159.36824217371],
    [0.00000003466, 3.47361825954, 2145.34674583789],
    [0.00000003737, 3.53018898305, 449.0364747513],
    [0.00000003286, 1.82620986507, 435.44002806861],
    [0.00000003043, 5.02988988519, 2.20386307129],
    [0.00000003999, 5.93005561135, 6245.1866318371],
    [0.00000003999, 5.93005561135, 6244.69899687009],
    [0.00000002999, 0.07518657231, 526.00262931501],
    [0.00000003014, 5.52171912448, 1054.94532701169],
    [0.00000003091, 4.5247739094, 42.997027585],
    [0.00000003274, 5.81401559586, 736.1203310153],
    [0.00000002965, 1.12065249261, 533.8669358412],
    [0.00000003149, 2.34844411589, 103.7639804718],
    [0.0000000361, 1.47397387042, 55.05162767771],
    [0.00000002937, 5.93931708618, 385.2523923381],
    [0.00000002903, 4.35235911504, 117.5636857037],
    [0.00000002968, 1.28091906944, 613.31440085451],
    [0.00000003097, 4.42120029558, 1395.24313830449],
    [0.00000002931, 3.60795663266, 202.4972126576],
    [0.00000003013, 1.495262966, 121.2352065359],
    [0.00000003206, 2.86107032756, 53.40958840249],
    [0.00000003269, 0.45608619325, 480.00777927849],
    [0.00000003948, 5.43052261409, 112.8832650427],
    [0.00000002824, 3.14926129801, 176.406715025],
    [0.00000002827, 0.36860696411, 429.81095377611],
    [0.00000003348, 3.55163976673, 6284.8041401832],
    [0.00000002862, 2.43356518574, 384.02855206069],
    [0.00000003228, 5.13696496058, 52.6039471229],
    [0.00000003446, 5.32686217736, 62.0076081116],
    [0.00000003096, 4.83839993614, 71.82946809809],
    [0.00000003031, 6.24076040166, 494.2348732801],
    [0.00000003021, 6.1053165853, 328.5964111407],
    [0.00000002731, 0.79873177065, 432.471082652],
    [0.00000003171, 4.9718793437, 10215.0138364028],
    [0.00000002674, 2.29257372574, 158.12984768129],
    [0.00000002901, 4.22947732371, 559.4697985068],
    [0.00000002631, 4.21066619701, 2008.8013566425],
    [0.00000002695, 3.54636234855, 81.61769818981],
    [0.00000002695, 3.54636234855, 81.13006322279],
    [0.00000002721, 4.26045579509, 326.1823604807],
    [0.00000002775, 4.27616320157, 457.8614969965],
    [0.00000003054, 6.2345598359, 6281.8351947666],
    [0.00000002852, 2.90626399353, 186.71620997851],
    [0.00000002538, 1.73224718947, 111.18634401329],
    [0.00000002835, 6.07135630955, 419.50145882259],
    [0.00000002868, 3.66893253825, 844.56699288049],
    [0.0000000253, 2.6109305256, 1050.7525413177],
    [0.00000002843, 4.15972261299, 830.3398988789],
    [0.00000002848, 4.69330398359, 659.36662477269],
    [0.00000003031, 2.55942970028, 406.3469551246],
    [0.00000002907, 3.71503751053, 573.6968925084],
    [0.00000002536, 5.01251643852, 82.6145359311],
    [0.00000002957, 2.02121290773, 947.70795120889],
    [0.00000003321, 3.87615887284, 449.9996825978],
    [0.00000003117, 4.74251772899, 457.32567791969],
    [0.00000002902, 1.37682148855, 10212.0448909862],
    [0.00000002459, 3.74222344492, 450.73339578069],
    [0.00000002557, 1.32711393852, 525.4813644532],
    [0.00000002624, 3.35106775051, 946.2234785006],
    [0.00000002417, 0.09697452811, 351.5727748252],
    [0.00000002454, 3.27912412212, 196.01680510321],
    [0.00000002585, 5.70826849733, 248.70700314271],
    [0.00000002549, 0.23244817308, 1062.80714141041],
    [0.00000002615, 4.06090316067, 425.13053311509],
    [0.00000002387, 2.04191008078, 654.3681977991],
    [0.00000002439, 1.45718218253, 462.74230389109],
    [0.00000002367, 2.75159024078, 107.52937739611],
    [0.00000002538, 4.19012282298, 481.2316195559],
    [0.00000002479, 3.56223236298, 205.9417309537],
    [0.00000002791, 5.44719714506, 24.14975911971],
    [0.00000002626, 2.73743077295, 213.0552779545],
    [0.00000002445, 0.13750022894, 146.87169909629],
    [0.00000002575, 0.32351821119, 86.07111631471],
    [0.0000000312, 1.20503303199, 456.36247007319],
    [0.00000002587, 1.5930450614, 400.8209466961],
    [0.00000002261, 3.2498721247, 644.33388949151],
    [0.00000002796, 0.30156280343, 216.67861467689],
    [0.00000002896, 0.71993168447, 1685.2959399851],
    [0.00000002453, 4.81368306062, 109.9625037359],
    [0.00000002325, 0.25394919776, 442.886135597],
    [0.00000002387, 3.75345095238, 599.0873068529],
    [0.00000002873, 5.1343084085, 834.5326845729],
    [0.00000002963, 5.48260613029, 2119.00767786191],
    [0.00000002233, 4.37346978315, 709.29362807231],
    [0.00000002337, 2.73478761543, 210.5739675049],
    [0.00000002259, 5.24608284286, 29.5036467663],
    [0.000000023, 2.19835177792, 986.0534351678],
    [0.00000002199, 1.2135935899, 606.2008538537],
    [0.00000002325, 4.84070679976, 109.701871305],
];

const Y2: &[Term] = &[
    [0.01620002167, 5.31277371181, 38.3768531213],
    [0.00028138323, 4.01361134771, 0.2438174835],
    [0.00012318619, 1.01433481938, 39.86132582961],
    [0.00008346956, 0.42201817445, 37.88921815429],
    [0.00005131003, 3.5589444324, 76.50988875911],
    [0.00004109792, 6.17733924169, 36.892380413],
    [0.00001369663, 1.9868308237, 1.7282901918],
    [0.00000633706, 0.81055475696, 3.21276290011],
    [0.00000583006, 6.25831267359, 41.3457985379],
    [0.00000546517, 5.42211492491, 75.0254160508],
    [0.00000246224, 0.87539145895, 213.5429129215],
    [0.00000159773, 5.97653264005, 206.42936592071],
    [0.00000156619, 2.04577076492, 220.6564599223],
    [0.00000191674, 0.60086490402, 529.9347825781],
    [0.00000188212, 2.86105100061, 35.40790770471],
    [0.00000117788, 2.55450585422, 522.8212355773],
    [0.00000114488, 4.76320074833, 35.9291725665],
    [0.00000112666, 4.9245929259, 537.0483295789],
    [0.00000105949, 5.84319366771, 40.8245336761],
    [0.00000077696, 5.55872082952, 77.9943614674],
    [0.00000090798, 0.48400254359, 73.5409433425],
    [0.00000067696, 0.87599797871, 426.8420083595],
    [0.0000007486, 6.15585546499, 4.6972356084],
    [0.00000064717, 1.34762573111, 34.9202727377],
    [0.00000051378, 1.41763897935, 36.404745446],
    [0.00000050205, 5.38246230326, 42.83027124621],
    [0.00000040929, 4.64969715335, 33.9234349964],
    [0.00000036136, 1.4422134497, 98.6561710411],
    [0.00000033953, 3.45488669371, 1059.6257476727],
    [0.00000034603, 4.83781708761, 76.0222537921],
    [0.00000035441, 0.92439194787, 31.2633061205],
    [0.00000029614, 1.7773506185, 28.81562556571],
    [0.00000031027, 3.40007815913, 45.49040012211],
    [0.00000035521, 2.70107635202, 39.3736908626],
    [0.00000025488, 2.47241259934, 47.9380806769],
    [0.00000020115, 5.50307482336, 1.24065522479],
    [0.00000014328, 1.16675266548, 433.9555553603],
    [0.00000015503, 1.56080925316, 114.6429243969],
    [0.00000016998, 2.50473507501, 33.43580002939],
    [0.00000013166, 5.10795715214, 419.72846135871],
    [0.00000013053, 1.40065469605, 60.52313540329],
    [0.00000010637, 4.37252543304, 34.1840674273],
    [0.0000000961, 0.08619380662, 640.1411037975],
    [0.00000009354, 6.12654852334, 42.5696388153],
    [0.00000011447, 1.48554252527, 71.5688356672],
    [0.00000008454, 4.3264180248, 2.7251279331],
    [0.00000009012, 2.87032368668, 72.05647063421],
    [0.00000009594, 4.22403656438, 69.3963417583],
    [0.00000007419, 1.92565712551, 227.77000692311],
    [0.000000068, 3.57170452455, 113.15845168861],
    [0.00000006267, 5.50825416463, 1066.7392946735],
    [0.00000006895, 2.74011142877, 111.67397898031],
    [0.0000000577, 5.94492182042, 32.4389622881],
    [0.00000005686, 0.6672629117, 30.300098274],
    [0.00000006679, 3.28449699734, 258.78949556011],
    [0.00000007799, 0.01316502615, 7.3573644843],
    [0.00000005906, 4.35406299044, 44.31474395451],
    [0.00000005606, 3.60862172739, 46.4536079686],
    [0.00000005525, 2.04832143671, 1052.51220067191],
    [0.00000007257, 4.88554087166, 1097.7587833105],
    [0.00000005427, 3.37665889417, 105.76971804189],
    [0.00000005179, 2.68906561571, 515.70768857651],
    [0.00000005163, 1.56680359144, 7.83293736379],
    [0.00000004688, 0.95059580199, 222.14093263061],
    [0.00000005379, 1.15102731522, 22.3900997655],
    [0.00000004607, 0.17861908533, 549.1603035533],
    [0.00000004101, 1.86095686008, 213.0552779545],
    [0.00000004262, 3.94315605774, 204.9448932124],
    [0.00000003916, 4.92658442131, 207.913838629],
    [0.00000004089, 0.26445229364, 304.84171947829],
    [0.00000003729, 6.12087852262, 199.3158189199],
    [0.0000000368, 3.97729685951, 1589.3167127673],
    [0.00000003702, 2.58942752453, 319.06881347989],
    [0.00000004832, 5.97662492227, 215.0273856298],
    [0.00000003474, 5.88640441483, 103.3365917021],
    [0.00000003298, 4.81858024415, 544.1618765797],
    [0.00000004521, 1.6499119846, 108.2173985967],
    [0.00000003967, 4.24856395374, 944.7390057923],
    [0.00000004059, 1.44024718167, 149.8070146181],
    [0.00000004009, 4.04772901629, 533.1161763158],
    [0.00000003288, 3.02037527521, 407.9344936969],
    [0.00000003976, 3.4314222542, 526.7533888404],
    [0.00000003343, 5.37024544109, 531.4192552864],
    [0.00000003932, 5.23324378146, 91.54262404029],
    [0.00000003478, 4.62796796973, 6.1817083167],
    [0.00000002967, 5.75717546362, 860.55374623631],
    [0.00000003058, 1.59562573237, 342.9747551161],
    [0.00000003974, 3.61989902199, 335.8612081153],
    [0.00000002849, 2.43690877786, 666.4801717735],
    [0.00000002999, 2.84954389869, 937.62545879149],
    [0.00000003008, 0.45545092573, 74.53778108379],
    [0.0000000308, 4.61982032828, 129.6756596781],
    [0.00000003346, 3.07224007183, 1162.7185218913],
    [0.00000002625, 3.26539092131, 273.8222308413],
    [0.00000002931, 3.14888688193, 235.68919520349],
    [0.00000002579, 5.19712816213, 1073.85284167431],
    [0.0000000255, 1.43127384605, 26.58288545949],
    [0.00000002542, 2.65218049337, 1265.81129610991],
    [0.00000002483, 3.30358671055, 453.1810763355],
    [0.00000002732, 3.33706438099, 563.38739755489],
    [0.00000002508, 0.10584642422, 37.8555882595],
    [0.00000002508, 5.05315792539, 425.35753565121],
    [0.0000000268, 1.03370719327, 454.6655490438],
    [0.00000002511, 1.57939297348, 209.6107596584],
    [0.00000002512, 0.17397391459, 217.4750661846],
    [0.00000002552, 4.09952672426, 79.47883417571],
    [0.00000002457, 1.09953412303, 38.89811798311],
    [0.00000002343, 3.50679449028, 981.3875687218],
    [0.00000002501, 3.24491806395, 669.4009330803],
    [0.0000000233, 2.37985529884, 38.32866901151],
    [0.00000002327, 5.10713891298, 38.4250372311],
    [0.00000002481, 0.85514029866, 655.1738390787],
    [0.00000002569, 2.65544269508, 464.97504399731],
];

const Y3: &[Term] = &[
    [0.00000985355, 5.40479271994, 38.3768531213],
    [0.00000482798, 2.40351592403, 37.88921815429],
    [0.00000416447, 5.08276459732, 0.2438174835],
    [0.00000303825, 5.25036318156, 39.86132582961],
    [0.00000089203, 6.2357699803, 36.892380413],
    [0.00000070862, 4.2682011133, 76.50988875911],
    [0.000000289, 4.0792231428, 41.3457985379],
    [0.00000022279, 1.38807052555, 206.42936592071],
    [0.0000002148, 0.30279640762, 220.6564599223],
    [0.00000016157, 4.26502283154, 522.8212355773],
    [0.00000015714, 3.19639937559, 537.0483295789],
    [0.00000011404, 0.6888152223, 35.40790770471],
    [0.00000013199, 4.77296321336, 7.3573644843],
    [0.00000007024, 5.41129077346, 3.21276290011],
    [0.00000006772, 5.90918041474, 69.3963417583],
    [0.00000004517, 1.7181339476, 45.49040012211],
    [0.00000004523, 2.61625996387, 31.2633061205],
    [0.00000003682, 3.04341607939, 98.6561710411],
    [0.00000003656, 2.17226292493, 968.64494742849],
    [0.00000003927, 5.25979459691, 426.8420083595],
    [0.00000003199, 3.2440664894, 1519.6765535255],
    [0.00000003498, 4.84556329465, 407.9344936969],
    [0.00000003304, 3.81825313228, 422.1615876985],
    [0.00000003331, 3.54124873059, 36.404745446],
    [0.00000003244, 4.42247914038, 484.2005649725],
    [0.00000002689, 5.61171743826, 441.06910236111],
    [0.00000003247, 3.33592493083, 498.42765897409],
    [0.00000002651, 2.02749548795, 304.84171947829],
    [0.00000002645, 0.90433895865, 461.77909604459],
    [0.00000002542, 1.05108120438, 444.5830566264],
    [0.00000002524, 5.46978523129, 433.9555553603],
    [0.00000002472, 0.92177286185, 319.06881347989],
    [0.00000002355, 2.03272387563, 447.552002043],
    [0.00000002876, 3.65433810175, 853.4401992355],
    [0.00000002279, 6.20789133449, 458.810150628],
    [0.00000002147, 1.06531556689, 175.40987728371],
    [0.00000002637, 2.06613866653, 73.5409433425],
];

const Y4: &[Term] = &[
    [0.00003455306, 2.04385259535, 38.3768531213],
    [0.00000047405, 0.64311364094, 0.2438174835],
    [0.00000021936, 4.30052120876, 37.88921815429],
    [0.00000015596, 0.30774488881, 76.50988875911],
    [0.00000017186, 3.96705739007, 39.86132582961],
    [0.00000017459, 3.25820107685, 36.892380413],
    [0.00000004229, 6.14484758916, 515.70768857651],
    [0.00000004334, 3.84568484898, 433.9555553603],
    [0.00000003547, 1.04322259069, 989.98558843089],
    [0.00000003155, 0.14083942013, 467.40817033709],
    [0.00000003017, 4.77718347184, 227.77000692311],
    [0.00000002981, 5.01159762849, 1.7282901918],
    [0.00000002295, 4.8498824073, 220.6564599223],
    [0.00000002296, 3.13566627364, 206.42936592071],
];

const Y5: &[Term] = &[
    [0.00000026291, 2.1464509752, 38.3768531213],
];

const Z0: &[Term] = &[
    [0.92866054405, 1.44103930278, 38.1330356378],
    [0.01245978462, 0.0, 0.0],
    [0.00474333567, 2.52218774238, 36.6485629295],
    [0.00451987936, 3.50949720541, 39.6175083461],
    [0.00417558068, 5.91310695421, 76.2660712756],
    [0.00084104329, 4.38928900096, 1.4844727083],
    [0.00032704958, 1.52048692001, 74.7815985673],
    [0.00030873335, 3.29017611456, 35.1640902212],
    [0.00025812584, 3.19303128782, 2.9689454166],
    [0.00016865319, 2.13251104425, 41.1019810544],
    [0.00011789909, 3.60001877675, 213.299095438],
    [0.00009770125, 2.80133971586, 73.297125859],
    [0.0001127968, 3.55816676334, 529.6909650946],
    [0.00004119873, 1.67934316836, 77.7505439839],
    [0.00002818034, 4.10661077794, 114.3991069134],
    [0.00002868677, 4.27011526203, 33.6796175129],
    [0.00002213464, 1.96045135168, 4.4534181249],
    [0.0000186565, 5.05540709577, 71.8126531507],
    [0.00000840177, 0.9426888516, 42.5864537627],
    [0.00000457516, 5.7165041208, 108.4612160802],
    [0.00000530252, 0.85800267793, 111.4301614968],
    [0.00000490859, 6.07827301209, 112.9146342051],
    [0.00000331254, 0.29304964526, 70.3281804424],
    [0.00000330045, 2.83839676215, 426.598190876],
    [0.00000273589, 3.91013681794, 1059.3819301892],
    [0.00000277586, 1.45092010545, 148.0787244263],
    [0.00000274474, 5.42657022437, 32.1951448046],
    [0.00000205306, 0.75818737085, 5.9378908332],
    [0.00000173516, 5.85498030099, 145.1097790097],
    [0.00000141275, 1.73147597657, 28.5718080822],
    [0.00000139093, 1.67466701191, 184.7272873558],
    [0.00000143647, 2.51620047812, 37.611770776],
    [0.00000136955, 0.20339778664, 79.2350166922],
    [0.00000126296, 4.4066138504, 37.1698277913],
    [0.00000120906, 1.61767636602, 39.0962434843],
    [0.00000111761, 6.20948230785, 98.8999885246],
    [0.00000140758, 3.50944989694, 38.6543004996],
    [0.00000111589, 4.18561395578, 47.6942631934],
    [0.00000133509, 4.78977105547, 38.084851528],
    [0.00000102622, 0.81673762159, 4.192785694],
    [0.00000133292, 1.23386935925, 38.1812197476],
    [0.00000098771, 0.72335005782, 106.9767433719],
    [0.00000093919, 0.56607810948, 206.1855484372],
    [0.00000081727, 3.47861315258, 220.4126424388],
    [0.00000074559, 2.31518880439, 312.1990839626],
    [0.00000074401, 5.99935727164, 181.7583419392],
    [0.00000073141, 1.80069951634, 137.0330241624],
    [0.00000066838, 1.87185330904, 221.3758502853],
    [0.00000058303, 5.61662561548, 35.685355083],
    [0.00000051685, 6.02831347649, 44.070926471],
    [0.00000051928, 0.40473854286, 40.5807161926],
    [0.00000048182, 2.97141991737, 37.8724032069],
    [0.00000049439, 1.66178905717, 68.8437077341],
    [0.00000047742, 3.05261105371, 38.3936680687],
    [0.00000046428, 2.66596739242, 146.594251718],
    [0.00000050936, 0.19994012329, 30.0562807905],
    [0.00000041127, 6.05239303825, 115.8835796217],
    [0.00000055537, 2.11977296055, 109.9456887885],
    [0.00000041357, 0.86667380713, 143.6253063014],
    [0.00000044492, 6.00613878606, 149.5631971346],
    [0.00000037856, 5.19945796177, 72.0732855816],
    [0.00000047361, 3.58964541604, 38.0211610532],
    [0.0000003469, 1.47398766326, 8.0767548473],
    [0.00000037349, 5.1506790304, 33.9402499438],
    [0.00000034386, 6.15246630929, 218.4069048687],
    [0.0000004718, 2.43405967107, 38.2449102224],
    [0.00000033382, 0.88396990078, 42.3258213318],
    [0.00000040753, 3.59668759304, 522.5774180938],
    [0.00000033071, 2.02572550598, 258.0244132148],
    [0.00000038849, 5.79294381756, 46.2097904851],
    [0.00000031716, 0.30412624027, 536.8045120954],
    [0.00000027605, 2.8154040594, 183.2428146475],
    [0.00000024616, 0.40597272412, 30.7106720963],
    [0.00000021716, 0.90792314747, 175.1660598002],
    [0.00000021634, 3.25469228647, 388.4651552382],
    [0.00000020384, 5.80954414865, 7.4223635415],
    [0.0000001864, 1.06424642993, 180.2738692309],
    [0.00000016716, 0.02332590259, 255.0554677982],
    [0.0000001879, 0.62408059806, 35.212274331],
    [0.0000001699, 2.1972652379, 294.6729761443],
    [0.00000016083, 4.20629091415, 0.9632078465],
    [0.00000021571, 2.3933770676, 152.5321425512],
    [0.00000017102, 5.39964889794, 41.0537969446],
    [0.00000014503, 4.66614523797, 110.2063212194],
    [0.00000015218, 2.93182248771, 219.891377577],
    [0.00000014757, 2.02029526083, 105.4922706636],
    [0.00000013303, 2.0936209925, 639.897286314],
    [0.00000013582, 0.9922261968, 44.7253177768],
    [0.00000011309, 4.15253392707, 487.3651437628],
    [0.00000012521, 0.41449986025, 186.2117600641],
    [0.00000012363, 3.07599476497, 6.592282139],
    [0.00000010825, 4.13817476053, 0.5212648618],
    [0.00000014304, 5.15644933777, 31.5407534988],
    [0.00000010056, 4.27077049743, 1589.0728952838],
    [0.00000009355, 1.23360360711, 216.9224321604],
    [0.00000008774, 5.77195684843, 12.5301729722],
    [0.00000008445, 0.17584724644, 291.7040307277],
    [0.00000008927, 2.36869187243, 331.3215390738],
    [0.00000009613, 0.28151591238, 60.7669528868],
    [0.00000008279, 5.72084525545, 36.7604375141],
    [0.00000009111, 3.49027191661, 45.2465826386],
    [0.00000008178, 0.25637861075, 39.5056337615],
    [0.00000008598, 3.10287346009, 256.5399405065],
    [0.00000009489, 4.94205919676, 151.0476698429],
    [0.00000008564, 2.15904622462, 274.0660483248],
    [0.00000007474, 2.93279436008, 27.0873353739],
    [0.00000007944, 0.382776999, 10213.285546211],
    [0.00000007132, 1.50971234331, 944.9828232758],
    [0.00000009005, 0.0728407473, 419.4846438752],
    [0.00000007642, 5.56097006597, 187.6962327724],
    [0.00000007705, 1.54152595157, 84.3428261229],
    [0.00000006896, 4.7145332474, 406.1031376411],
    [0.00000007282, 5.81348163927, 316.3918696566],
    [0.00000006215, 5.27967153537, 7.1135470008],
    [0.0000000609, 4.48506819561, 415.2918581812],
    [0.00000006316, 0.59502514374, 453.424893819],
    [0.00000006177, 5.20115334051, 80.7194894005],
    [0.00000006324, 2.18406254461, 142.1408335931],
    [0.00000005646, 0.76840537906, 11.0457002639],
    [0.00000006102, 5.58764378724, 662.531203563],
    [0.00000005334, 4.52703538458, 103.0927742186],
    [0.00000006269, 1.95162790177, 605.9570363702],
    [0.00000005591, 5.20631788297, 14.0146456805],
    [0.00000004914, 1.3990603811, 253.5709950899],
    [0.00000004519, 2.07610590431, 2042.4977891028],
    [0.00000005681, 4.8079103997, 641.1211265914],
    [0.00000006294, 0.56936923702, 31.019488637],
    [0.00000004758, 2.54312258712, 367.9701020033],
    [0.00000004406, 0.33696669222, 328.3525936572],
    [0.0000000439, 5.08949604858, 286.596221297],
    [0.00000004678, 4.87546696295, 442.7517005706],
    [0.00000004407, 5.58110402011, 252.0865223816],
    [0.00000004305, 1.31724140028, 493.0424021651],
];

const Z1: &[Term] = &[
    [0.06832633707, 3.80782656293, 38.1330356378],
    [0.00064598028, PI, 0.0],
    [0.00042738331, 4.82540335637, 36.6485629295],
    [0.00031421638, 6.08083255385, 39.6175083461],
    [0.00027088623, 1.97557659098, 76.2660712756],
    [0.00005924197, 0.48500737803, 1.4844727083],
    [0.00002429056, 3.86784381378, 74.7815985673],
    [0.00002107258, 6.19720726581, 35.1640902212],
    [0.00001644542, 5.76041185818, 2.9689454166],
    [0.00001059588, 4.89687990866, 41.1019810544],
    [0.00001084464, 5.33722455731, 213.299095438],
    [0.00000880611, 5.70150456912, 529.6909650946],
    [0.00000824125, 5.04137560987, 73.297125859],
    [0.00000250821, 4.25953295692, 77.7505439839],
    [0.00000158517, 0.13500997625, 114.3991069134],
    [0.0000012939, 4.76999039957, 4.4534181249],
    [0.00000105033, 0.99234583035, 33.6796175129],
    [0.00000054734, 3.96812588022, 42.5864537627],
    [0.00000034799, 4.30403521625, 37.611770776],
    [0.0000004134, 2.29314729799, 206.1855484372],
    [0.00000028374, 1.67853213747, 111.4301614968],
    [0.0000002534, 1.70015942799, 220.4126424388],
    [0.00000026021, 6.09040669128, 426.598190876],
    [0.00000027198, 5.95188476775, 71.8126531507],
    [0.00000021598, 2.17619854748, 112.9146342051],
    [0.00000025154, 4.13631230281, 28.5718080822],
    [0.00000020543, 1.56946393801, 38.6543004996],
    [0.00000017216, 2.81703507859, 98.8999885246],
    [0.00000019926, 3.15301554161, 108.4612160802],
    [0.00000015544, 2.07364839388, 40.5807161926],
    [0.00000015357, 5.45891321516, 522.5774180938],
    [0.00000012266, 3.82427247378, 5.9378908332],
    [0.00000013587, 1.34795861192, 47.6942631934],
    [0.00000010839, 4.75461825384, 536.8045120954],
    [0.00000010785, 2.61566414257, 79.2350166922],
    [0.00000010916, 3.88744647444, 35.685355083],
    [0.00000009833, 3.62341506247, 38.1812197476],
    [0.00000009849, 0.89613145346, 38.084851528],
    [0.00000009317, 0.51297445145, 37.1698277913],
    [0.00000008955, 4.00532631258, 39.0962434843],
    [0.00000007089, 2.29610703652, 137.0330241624],
    [0.00000007573, 3.20619266484, 4.192785694],
    [0.00000008063, 5.86511590361, 1059.3819301892],
    [0.00000007655, 3.3961625565, 145.1097790097],
    [0.00000006061, 2.31235275416, 109.9456887885],
    [0.00000005726, 6.23400745185, 312.1990839626],
    [0.00000003739, 2.50010254963, 30.0562807905],
    [0.00000004145, 2.00938305966, 44.070926471],
    [0.0000000348, 5.8897111359, 38.0211610532],
    [0.00000003467, 4.73412534395, 38.2449102224],
    [0.00000004736, 6.28313624461, 149.5631971346],
    [0.00000003905, 4.49400805134, 106.9767433719],
    [0.00000002982, 1.80386443362, 46.2097904851],
    [0.00000003538, 5.27114846878, 37.8724032069],
    [0.00000003508, 5.35267669439, 38.3936680687],
    [0.00000002821, 1.10242173566, 33.9402499438],
    [0.0000000315, 2.14792830412, 115.8835796217],
    [0.00000003329, 3.5622646377, 181.7583419392],
    [0.00000002787, 1.21334651843, 72.0732855816],
    [0.00000002453, 3.18401661435, 42.3258213318],
    [0.00000002523, 5.51669920239, 8.0767548473],
];

const Z2: &[Term] = &[
    [0.00291361164, 5.57085222635, 38.1330356378],
    [0.0000220782, 0.45423510946, 36.6485629295],
    [0.00002644401, PI, 0.0],
    [0.00001184984, 3.62696666572, 76.2660712756],
    [0.00000875873, 1.60783110298, 39.6175083461],
    [0.0000025328, 2.25499665308, 1.4844727083],
    [0.00000139875, 1.66224942942, 35.1640902212],
    [0.00000105837, 5.61746558118, 74.7815985673],
    [0.00000055479, 0.51417309302, 213.299095438],
    [0.00000051858, 1.204505199, 2.9689454166],
    [0.00000040183, 1.45604293605, 529.6909650946],
    [0.00000041153, 0.64158589676, 73.297125859],
    [0.00000013931, 0.27428875486, 41.1019810544],
    [0.00000009181, 2.83312722213, 33.6796175129],
    [0.00000007421, 4.32019600438, 206.1855484372],
    [0.00000006998, 5.87666052849, 77.7505439839],
    [0.00000007085, 1.66037085233, 71.8126531507],
    [0.00000006818, 1.56386946094, 114.3991069134],
    [0.00000004838, 0.83470875824, 220.4126424388],
    [0.00000002545, 0.43712705655, 4.4534181249],
];

const Z3: &[Term] = &[
    [0.0000822129, 1.01632472042, 38.1330356378],
    [0.00000103933, 0.0, 0.0],
    [0.00000070154, 2.36502685986, 36.6485629295],
    [0.00000031617, 5.35266161292, 76.2660712756],
    [0.0000001547, 3.21170859085, 39.6175083461],
    [0.00000007111, 3.99067059016, 1.4844727083],
    [0.00000004656, 3.62376309338, 35.1640902212],
    [0.00000002988, 1.0372733054, 74.7815985673],
];

const Z4: &[Term] = &[
    [0.00000172227, 2.66872693322, 38.1330356378],
];

pub static NEPTUNE: Vsop87Table = Vsop87Table {
    variables: Variables::Rectangular,
    reference: Reference::EclipticOfDate,
    series: [
        &[X0, X1, X2, X3, X4, X5],
        &[Y0, Y1, Y2, Y3, Y4, Y5],
        &[Z0, Z1, Z2, Z3, Z4],
    ],
};
